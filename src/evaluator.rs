//! Password policy evaluator - runs the rule pipeline.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::sync::Arc;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::policy::PolicyChecker;
use crate::rules::RULES;
use crate::violation::PolicyViolation;

/// Validates a candidate password against `policy`.
///
/// Rules run in a fixed order (confirmation, length, blacklist, obvious,
/// reuse, complexity) and evaluation stops at the first failure.
///
/// # Returns
/// `Ok(())` if every active rule passes, otherwise the first violation.
pub fn validate_password(
    policy: &PolicyChecker,
    password: &SecretString,
) -> Result<(), PolicyViolation> {
    let pwd = password.expose_secret();

    for (_rule_name, rule_fn) in RULES {
        if let Err(violation) = rule_fn(policy, pwd) {
            #[cfg(feature = "tracing")]
            tracing::debug!("Password rejected by {} rule: {}", _rule_name, violation);
            return Err(violation);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("Password accepted by policy");

    Ok(())
}

impl PolicyChecker {
    /// Validates `password` against this policy.
    ///
    /// See [`validate_password`].
    pub fn validate(&self, password: &SecretString) -> Result<(), PolicyViolation> {
        validate_password(self, password)
    }
}

/// Runs [`validate_password`] on tokio's blocking pool.
///
/// Hash verification for the reuse check is deliberately slow, so async
/// callers should not run it on a runtime worker.
///
/// # Panics
/// Propagates a panic raised while validating.
#[cfg(feature = "async")]
pub async fn validate_password_async(
    policy: Arc<PolicyChecker>,
    password: SecretString,
) -> Result<(), PolicyViolation> {
    let handle = tokio::task::spawn_blocking(move || validate_password(&policy, &password));
    match handle.await {
        Ok(outcome) => outcome,
        Err(join_error) => std::panic::resume_unwind(join_error.into_panic()),
    }
}

/// Async version that sends the validation outcome via channel.
#[cfg(feature = "async")]
pub async fn validate_password_tx(
    policy: Arc<PolicyChecker>,
    password: SecretString,
    tx: mpsc::Sender<Result<(), PolicyViolation>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("validation is about to start...");

    let outcome = validate_password_async(policy, password).await;

    if let Err(_e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blacklist::Blacklist;
    use crate::requirement::{Requirement, all_requirements};
    use std::sync::Arc;

    const APP_SPECIFIC_OBVIOUS_PASSWORDS: [&str; 6] = [
        "appname",
        "companyname",
        "companyltd",
        "robert",
        "smith",
        "bob@example.com",
    ];

    fn secret(value: &str) -> SecretString {
        SecretString::new(value.to_string().into())
    }

    fn plain_verifier(candidate: &str, hash: &str) -> bool {
        hash.strip_prefix("plain:") == Some(candidate)
    }

    fn blacklist() -> Arc<Blacklist> {
        Arc::new(Blacklist::new(["1q2w3e4r5t", "1234567890", "qwertyuiop"]))
    }

    fn checker() -> PolicyChecker {
        PolicyChecker::builder(APP_SPECIFIC_OBVIOUS_PASSWORDS)
            .blacklist(blacklist())
            .previous_passwords(["plain:couldyouhearme2", "plain:couldyouhearmeb4"])
            .verifier(plain_verifier)
            .build()
    }

    #[test]
    fn test_passes_new_password() {
        assert_eq!(checker().validate(&secret("canyouhearme1")), Ok(()));
    }

    #[test]
    fn test_fails_short_password() {
        let err = checker().validate(&secret("abc")).unwrap_err();
        assert_eq!(err.to_string(), "New password must be at least 10 characters long");
    }

    #[test]
    fn test_fails_common_password() {
        let err = checker().validate(&secret("1q2W3e4R5t")).unwrap_err();
        assert_eq!(err.to_string(), "New password is too common, choose another");
    }

    #[test]
    fn test_fails_obvious_passwords() {
        for pwd in ["companyltd", "robertsmith", "07777123456", "1979-01-23", "31/12/1999"] {
            let err = checker().validate(&secret(pwd)).unwrap_err();
            assert_eq!(err, PolicyViolation::TooObvious, "for {pwd}");
        }
    }

    #[test]
    fn test_fails_previous_passwords() {
        for pwd in ["couldyouhearme2", "couldyouhearmeb4"] {
            let err = checker().validate(&secret(pwd)).unwrap_err();
            assert_eq!(
                err.to_string(),
                "New password has been used previously, choose another"
            );
        }
    }

    #[test]
    fn test_reuse_skipped_without_history() {
        let policy = PolicyChecker::builder(APP_SPECIFIC_OBVIOUS_PASSWORDS)
            .blacklist(blacklist())
            .verifier(|_: &str, _: &str| true)
            .build();
        assert_eq!(policy.validate(&secret("couldyouhearme2")), Ok(()));
    }

    #[test]
    fn test_confirmation_checked_first() {
        let policy = checker().to_builder().confirmation(secret("abcd")).build();
        let err = policy.validate(&secret("abc")).unwrap_err();
        assert_eq!(err.to_string(), "New and confirmation passwords are different");

        let policy = checker()
            .to_builder()
            .confirmation(secret("canyouhearme1"))
            .build();
        assert_eq!(policy.validate(&secret("canyouhearme1")), Ok(()));
    }

    #[test]
    fn test_length_before_blacklist() {
        let policy = PolicyChecker::builder(APP_SPECIFIC_OBVIOUS_PASSWORDS)
            .blacklist(Arc::new(Blacklist::new(["abc"])))
            .build();
        assert_eq!(
            policy.validate(&secret("abc")),
            Err(PolicyViolation::TooShort { min_length: 10 })
        );
    }

    #[test]
    fn test_blacklist_before_obvious() {
        let err = checker().validate(&secret("1234567890")).unwrap_err();
        assert_eq!(err, PolicyViolation::TooCommon);
    }

    #[test]
    fn test_blacklist_wins_over_complexity() {
        let policy = checker()
            .to_builder()
            .blacklist(Arc::new(Blacklist::new(["Canyouhearme1*"])))
            .complexity_requirements(all_requirements())
            .build();
        assert_eq!(
            policy.validate(&secret("CANYOUHEARME1*")),
            Err(PolicyViolation::TooCommon)
        );
    }

    #[test]
    fn test_obvious_before_reuse() {
        let policy = checker()
            .to_builder()
            .previous_passwords(["plain:robertsmith1"])
            .build();
        assert_eq!(
            policy.validate(&secret("robertsmith1")),
            Err(PolicyViolation::TooObvious)
        );
    }

    #[test]
    fn test_reuse_before_complexity() {
        let policy = checker()
            .to_builder()
            .complexity_requirements(all_requirements())
            .build();
        assert_eq!(
            policy.validate(&secret("couldyouhearme2")),
            Err(PolicyViolation::PreviouslyUsed)
        );
    }

    #[test]
    fn test_complexity_messages() {
        let policy = checker()
            .to_builder()
            .complexity_requirements([Requirement::Uppercase])
            .build();
        let err = policy.validate(&secret("canyouhearme1")).unwrap_err();
        assert_eq!(err.to_string(), "New password should contain 1 upper case letter");

        let policy = checker()
            .to_builder()
            .complexity_requirements(all_requirements())
            .build();
        let err = policy.validate(&secret("canyouhearme")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "New password should contain 1 upper case letter, 1 number and 1 symbol"
        );
        assert_eq!(policy.validate(&secret("Canyouhearme1*")), Ok(()));
    }

    #[test]
    fn test_min_length_below_floor_quotes_floor() {
        let policy = checker().to_builder().min_length(4).build();
        let err = policy.validate(&secret("abcdefgh")).unwrap_err();
        assert_eq!(err, PolicyViolation::TooShort { min_length: 10 });
    }

    #[test]
    fn test_raised_min_length() {
        let policy = checker().to_builder().min_length(15).build();
        let err = policy.validate(&secret("canyouhearme1")).unwrap_err();
        assert_eq!(err.to_string(), "New password must be at least 15 characters long");
    }

    #[test]
    fn test_multibyte_password_counts_characters() {
        let ascii = checker().validate(&secret("abcde")).unwrap_err();
        let multibyte = checker().validate(&secret("ĉĝĥĵŝ")).unwrap_err();
        assert_eq!(ascii, multibyte);

        assert_eq!(checker().validate(&secret("ĉĝĥĵŝŭĉĝĥĵ")), Ok(()));
    }

    #[test]
    fn test_validation_is_repeatable() {
        let policy = checker();
        assert!(policy.validate(&secret("abc")).is_err());
        assert_eq!(policy.validate(&secret("canyouhearme1")), Ok(()));
        assert!(policy.validate(&secret("companyltd")).is_err());
        assert_eq!(validate_password(&policy, &secret("canyouhearme1")), Ok(()));
    }

    #[cfg(feature = "bcrypt")]
    #[test]
    fn test_end_to_end_with_bcrypt_history() {
        let policy = PolicyChecker::builder(APP_SPECIFIC_OBVIOUS_PASSWORDS)
            .blacklist(blacklist())
            .previous_passwords([
                "$2y$11$V8Tvqr3nyMMQrR1xE/IFgepTahAprWKWfoh.xgN7ziWdwYRsZyzCu",
                "$2y$11$AFhINRcNKiKR/OKAb8Is8uxovaHMjHhpsVxP8rULLoJRkGi7hhXYa",
            ])
            .complexity_requirements(all_requirements())
            .build();

        assert_eq!(policy.validate(&secret("Canyouhearme1*")), Ok(()));
        assert_eq!(
            policy.validate(&secret("companyltd")),
            Err(PolicyViolation::TooObvious)
        );
        assert_eq!(
            policy.validate(&secret("couldyouhearme2")),
            Err(PolicyViolation::PreviouslyUsed)
        );
        assert_eq!(
            policy.validate(&secret("couldyouhearmeb4")),
            Err(PolicyViolation::PreviouslyUsed)
        );
    }
}
