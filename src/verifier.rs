//! Hash verification used by the reuse check.
//!
//! The reuse rule never hashes anything itself: it hands each stored hash and
//! the candidate to a [`HashVerifier`]. The built-in verifiers are gated
//! behind the `bcrypt` (default) and `argon2` features; callers can plug in
//! any other scheme with a closure.

/// Verifies a plaintext candidate against a stored one-way hash.
///
/// Implementations must return `false` for hashes they cannot parse rather
/// than failing.
pub trait HashVerifier: Send + Sync {
    fn verify(&self, candidate: &str, hash: &str) -> bool;
}

impl<F> HashVerifier for F
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn verify(&self, candidate: &str, hash: &str) -> bool {
        self(candidate, hash)
    }
}

/// Verifies bcrypt hashes (`$2a$`, `$2b$`, `$2x$`, `$2y$`).
#[cfg(feature = "bcrypt")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BcryptVerifier;

#[cfg(feature = "bcrypt")]
impl HashVerifier for BcryptVerifier {
    fn verify(&self, candidate: &str, hash: &str) -> bool {
        match bcrypt::verify(candidate, hash) {
            Ok(matched) => matched,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Unverifiable bcrypt hash: {}", _e);
                false
            }
        }
    }
}

/// Verifies Argon2 hashes in PHC string format (`$argon2id$...`).
#[cfg(feature = "argon2")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Verifier;

#[cfg(feature = "argon2")]
impl HashVerifier for Argon2Verifier {
    fn verify(&self, candidate: &str, hash: &str) -> bool {
        use argon2::Argon2;
        use argon2::password_hash::{PasswordHash, PasswordVerifier};

        let parsed = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Unverifiable argon2 hash: {}", _e);
                return false;
            }
        };
        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok()
    }
}

/// Default verifier: picks a built-in scheme from the hash prefix.
///
/// Hashes for schemes that are not compiled in never match.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformVerifier;

impl HashVerifier for PlatformVerifier {
    fn verify(&self, candidate: &str, hash: &str) -> bool {
        #[cfg(feature = "argon2")]
        {
            if hash.starts_with("$argon2") {
                return Argon2Verifier.verify(candidate, hash);
            }
        }

        #[cfg(feature = "bcrypt")]
        {
            if hash.starts_with("$2") {
                return BcryptVerifier.verify(candidate, hash);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::warn!("No verifier available for stored hash format");

        let _ = (candidate, hash);
        false
    }
}
