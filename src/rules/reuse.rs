//! Reuse rule - rejects passwords matching a previously stored hash.

use super::RuleResult;
use crate::policy::PolicyChecker;
use crate::violation::PolicyViolation;

/// Fails if the password verifies against any of the policy's previous hashes.
///
/// Skipped entirely when no history was configured.
pub fn reuse_rule(policy: &PolicyChecker, password: &str) -> RuleResult {
    let Some(hashes) = policy.previous_hashes.as_deref() else {
        return Ok(());
    };

    if hashes
        .iter()
        .any(|hash| policy.verifier.verify(password, hash))
    {
        return Err(PolicyViolation::PreviouslyUsed);
    }
    Ok(())
}
