//! Password policy checking library
//!
//! Judges a candidate password against a configurable policy and reports
//! either acceptance or the first rule it violates. Nothing is hashed or
//! stored here: previous passwords are only compared through a
//! [`HashVerifier`].
//!
//! Rules run in this order, stopping at the first failure:
//!
//! 1. confirmation matches (if a confirmation value was given)
//! 2. minimum length, counted in characters
//! 3. not in the blacklist of common passwords
//! 4. not obvious (contains an app/user specific word, or is a bare date or
//!    phone number)
//! 5. not previously used (if a password history was given)
//! 6. contains every enabled character class (reported all at once)
//!
//! # Features
//!
//! - `bcrypt` (default): bcrypt support for the reuse check
//! - `argon2`: Argon2 support for the reuse check
//! - `async`: validation on tokio's blocking pool
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Custom path to blacklist file
//!   (default: `./assets/password-blacklist.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_policy::{PolicyChecker, Requirement, init_blacklist};
//! use secrecy::SecretString;
//!
//! // Initialize blacklist (call once at startup)
//! init_blacklist().expect("Failed to load blacklist");
//!
//! let policy = PolicyChecker::builder(["myapp", "robert", "smith"])
//!     .previous_passwords(["$2y$11$V8Tvqr3nyMMQrR1xE/IFgepTahAprWKWfoh.xgN7ziWdwYRsZyzCu"])
//!     .complexity_requirements(Requirement::ALL)
//!     .build();
//!
//! let password = SecretString::new("Canyouhearme1*".to_string().into());
//! match policy.validate(&password) {
//!     Ok(()) => println!("Accepted"),
//!     Err(violation) => println!("{violation}"),
//! }
//! ```

// Internal modules
mod blacklist;
mod evaluator;
mod join;
mod policy;
mod requirement;
mod rules;
mod verifier;
mod violation;

// Public API
pub use blacklist::{
    Blacklist, BlacklistError, get_blacklist_path, init_blacklist, init_blacklist_from_path,
    is_blacklisted, shared_blacklist,
};
pub use evaluator::validate_password;
pub use join::join_human;
pub use policy::{MIN_LENGTH, PolicyBuilder, PolicyChecker};
pub use requirement::{Requirement, Requirements, all_requirements};
pub use verifier::{HashVerifier, PlatformVerifier};
pub use violation::PolicyViolation;

#[cfg(feature = "bcrypt")]
pub use verifier::BcryptVerifier;

#[cfg(feature = "argon2")]
pub use verifier::Argon2Verifier;

#[cfg(feature = "async")]
pub use evaluator::{validate_password_async, validate_password_tx};
