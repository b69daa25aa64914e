//! Character-class complexity requirements.

use std::collections::BTreeSet;

/// A character class that a password can be required to contain.
///
/// Variants are ordered the way missing classes are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Requirement {
    Lowercase,
    Uppercase,
    Number,
    Symbol,
}

/// Set of enabled requirements. Empty means complexity checking is off.
pub type Requirements = BTreeSet<Requirement>;

impl Requirement {
    pub const ALL: [Requirement; 4] = [
        Requirement::Lowercase,
        Requirement::Uppercase,
        Requirement::Number,
        Requirement::Symbol,
    ];

    /// Phrase used in the missing-complexity message.
    pub fn description(self) -> &'static str {
        match self {
            Requirement::Lowercase => "1 lower case letter",
            Requirement::Uppercase => "1 upper case letter",
            Requirement::Number => "1 number",
            Requirement::Symbol => "1 symbol",
        }
    }

    /// Returns `true` if `c` belongs to this class.
    pub fn matches(self, c: char) -> bool {
        match self {
            Requirement::Lowercase => c.is_lowercase(),
            Requirement::Uppercase => c.is_uppercase(),
            Requirement::Number => c.is_ascii_digit(),
            Requirement::Symbol => !(c.is_lowercase() || c.is_uppercase() || c.is_ascii_digit()),
        }
    }

    /// Returns `true` if at least one character of `password` belongs to this class.
    pub fn is_met_by(self, password: &str) -> bool {
        password.chars().any(|c| self.matches(c))
    }
}

/// Convenience constructor for a set with every requirement enabled.
pub fn all_requirements() -> Requirements {
    Requirement::ALL.into_iter().collect()
}
