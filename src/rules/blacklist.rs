//! Blacklist rule - checks if password is a known common password.

use super::RuleResult;
use crate::policy::PolicyChecker;
use crate::violation::PolicyViolation;

/// Fails if the password is in the policy's blacklist (case-insensitive).
pub fn blacklist_rule(policy: &PolicyChecker, password: &str) -> RuleResult {
    if policy.blacklist.contains(password) {
        return Err(PolicyViolation::TooCommon);
    }
    Ok(())
}
