//! Policy rules
//!
//! Each rule checks one aspect of a candidate password against the policy.
//! The evaluator runs them in a fixed order and stops at the first failure.

mod blacklist;
mod complexity;
mod confirmation;
mod length;
mod obvious;
mod reuse;

pub use blacklist::blacklist_rule;
pub use complexity::complexity_rule;
pub use confirmation::confirmation_rule;
pub use length::length_rule;
pub use obvious::obvious_rule;
pub use reuse::reuse_rule;

use crate::policy::PolicyChecker;
use crate::violation::PolicyViolation;

/// Result type for rule functions.
/// - `Ok(())` - Rule passed or is not active for this policy
/// - `Err(violation)` - Rule failed
pub type RuleResult = Result<(), PolicyViolation>;

/// Signature shared by every rule.
pub type Rule = fn(&PolicyChecker, &str) -> RuleResult;

/// Rules in evaluation order.
pub const RULES: [(&str, Rule); 6] = [
    ("confirmation", confirmation_rule),
    ("length", length_rule),
    ("blacklist", blacklist_rule),
    ("obvious", obvious_rule),
    ("reuse", reuse_rule),
    ("complexity", complexity_rule),
];
