//! Obvious rule - rejects identifying substrings and bare dates/phone numbers.

use super::RuleResult;
use crate::policy::PolicyChecker;
use crate::violation::PolicyViolation;

/// Separators stripped before checking for an all-digit password.
const SEPARATORS: [char; 3] = [' ', '/', '-'];

/// Fails if the password contains one of the policy's obvious substrings
/// (case-insensitive), or is only digits once separators are removed.
pub fn obvious_rule(policy: &PolicyChecker, password: &str) -> RuleResult {
    if contains_obvious(password, &policy.obvious) || is_numeric_pattern(password) {
        return Err(PolicyViolation::TooObvious);
    }
    Ok(())
}

fn contains_obvious(password: &str, obvious: &[String]) -> bool {
    let haystack = password.to_lowercase();
    obvious
        .iter()
        .filter(|needle| !needle.is_empty())
        .any(|needle| haystack.contains(&needle.to_lowercase()))
}

/// Dates of birth and phone numbers: `1979-01-23`, `31/12/1999`, `07777 123456`.
fn is_numeric_pattern(password: &str) -> bool {
    let mut digits = password.chars().filter(|c| !SEPARATORS.contains(c)).peekable();
    digits.peek().is_some() && digits.all(|c| c.is_ascii_digit())
}
