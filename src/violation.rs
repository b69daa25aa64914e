//! Policy violations reported by the validation pipeline.

use thiserror::Error;

use crate::join::join_human;
use crate::requirement::Requirement;

/// The single failure outcome of [`validate_password`](crate::validate_password).
///
/// `Display` renders the user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyViolation {
    #[error("New and confirmation passwords are different")]
    ConfirmationMismatch,
    #[error("New password must be at least {min_length} characters long")]
    TooShort { min_length: usize },
    #[error("New password is too common, choose another")]
    TooCommon,
    #[error("New password is too obvious, choose another")]
    TooObvious,
    #[error("New password has been used previously, choose another")]
    PreviouslyUsed,
    #[error("New password should contain {}", describe_missing(.missing))]
    MissingComplexity { missing: Vec<Requirement> },
}

impl PolicyViolation {
    /// Returns the user-facing message for this violation.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

fn describe_missing(missing: &[Requirement]) -> String {
    let phrases: Vec<&str> = missing.iter().map(|r| r.description()).collect();
    join_human(&phrases, "and")
}
