//! Length rule - checks password minimum length in characters.

use super::RuleResult;
use crate::policy::PolicyChecker;
use crate::violation::PolicyViolation;

/// Fails if `password` has fewer Unicode scalar values than the policy minimum.
pub fn length_rule(policy: &PolicyChecker, password: &str) -> RuleResult {
    if password.chars().count() < policy.min_length {
        return Err(PolicyViolation::TooShort {
            min_length: policy.min_length,
        });
    }
    Ok(())
}
