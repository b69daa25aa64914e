//! Complexity rule - checks for the enabled character classes.

use super::RuleResult;
use crate::policy::PolicyChecker;
use crate::violation::PolicyViolation;

/// Fails if any enabled character class is absent from the password.
///
/// Unlike the other rules this collects every missing class and reports
/// them together.
pub fn complexity_rule(policy: &PolicyChecker, password: &str) -> RuleResult {
    let missing: Vec<_> = policy
        .requirements
        .iter()
        .copied()
        .filter(|requirement| !requirement.is_met_by(password))
        .collect();

    if !missing.is_empty() {
        return Err(PolicyViolation::MissingComplexity { missing });
    }
    Ok(())
}
