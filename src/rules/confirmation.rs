//! Confirmation rule - candidate must match the confirmation value.

use secrecy::ExposeSecret;

use super::RuleResult;
use crate::policy::PolicyChecker;
use crate::violation::PolicyViolation;

/// Fails if a confirmation value is set and differs from `password`.
pub fn confirmation_rule(policy: &PolicyChecker, password: &str) -> RuleResult {
    match &policy.confirmation {
        Some(confirmation) if confirmation.expose_secret() != password => {
            Err(PolicyViolation::ConfirmationMismatch)
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn with_confirmation(value: &str) -> PolicyChecker {
        PolicyChecker::builder(["appname"])
            .confirmation(SecretString::new(value.to_string().into()))
            .build()
    }

    #[test]
    fn test_confirmation_not_set() {
        let policy = PolicyChecker::new(["appname"]);
        assert_eq!(confirmation_rule(&policy, "anything at all"), Ok(()));
    }

    #[test]
    fn test_confirmation_matches() {
        let policy = with_confirmation("Canyouhearme1*");
        assert_eq!(confirmation_rule(&policy, "Canyouhearme1*"), Ok(()));
    }

    #[test]
    fn test_confirmation_is_case_sensitive() {
        let policy = with_confirmation("Canyouhearme1*");
        assert_eq!(
            confirmation_rule(&policy, "canyouhearme1*"),
            Err(PolicyViolation::ConfirmationMismatch)
        );
    }

    #[test]
    fn test_empty_confirmation_is_still_checked() {
        let policy = with_confirmation("");
        assert_eq!(
            confirmation_rule(&policy, "Canyouhearme1*"),
            Err(PolicyViolation::ConfirmationMismatch)
        );
    }
}
