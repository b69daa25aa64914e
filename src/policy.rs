//! Policy configuration: an immutable [`PolicyChecker`] built through a
//! [`PolicyBuilder`].

use std::fmt;
use std::sync::Arc;

use secrecy::SecretString;

use crate::blacklist::{Blacklist, shared_blacklist};
use crate::requirement::{Requirement, Requirements};
use crate::verifier::{HashVerifier, PlatformVerifier};

/// Lowest accepted minimum length.
///
/// The bundled blacklist only holds entries of at least this many
/// characters, so a lower minimum would let short common passwords through.
pub const MIN_LENGTH: usize = 10;

/// Fully-configured password policy.
///
/// Validation is a pure function of this value and the candidate, so a
/// checker can be shared across threads behind an `Arc`.
#[derive(Clone)]
pub struct PolicyChecker {
    pub(crate) min_length: usize,
    pub(crate) confirmation: Option<Arc<SecretString>>,
    pub(crate) previous_hashes: Option<Vec<String>>,
    pub(crate) obvious: Arc<[String]>,
    pub(crate) requirements: Requirements,
    pub(crate) blacklist: Arc<Blacklist>,
    pub(crate) verifier: Arc<dyn HashVerifier>,
}

impl PolicyChecker {
    /// Starts configuring a policy that rejects passwords containing any of
    /// `obvious` (app name, user's name, e-mail...).
    pub fn builder<I, S>(obvious: I) -> PolicyBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PolicyBuilder::new(obvious)
    }

    /// A policy with default settings: only length, blacklist and obvious
    /// checks are active.
    pub fn new<I, S>(obvious: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder(obvious).build()
    }

    /// Returns a builder holding this policy's configuration.
    ///
    /// The obvious substrings are carried over and cannot be replaced.
    pub fn to_builder(&self) -> PolicyBuilder {
        PolicyBuilder {
            policy: self.clone(),
            blacklist_injected: true,
        }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn obvious(&self) -> &[String] {
        &self.obvious
    }

    pub fn requirements(&self) -> &Requirements {
        &self.requirements
    }

    /// Stored hashes, or `None` when the reuse check is disabled.
    pub fn previous_hashes(&self) -> Option<&[String]> {
        self.previous_hashes.as_deref()
    }

    pub fn has_confirmation(&self) -> bool {
        self.confirmation.is_some()
    }

    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }
}

impl fmt::Debug for PolicyChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyChecker")
            .field("min_length", &self.min_length)
            .field("confirmation", &self.confirmation.as_ref().map(|_| "[REDACTED]"))
            .field(
                "previous_hashes",
                &self.previous_hashes.as_ref().map(|h| h.len()),
            )
            .field("obvious", &self.obvious)
            .field("requirements", &self.requirements)
            .field("blacklist_len", &self.blacklist.len())
            .finish_non_exhaustive()
    }
}

/// Builder for [`PolicyChecker`].
pub struct PolicyBuilder {
    policy: PolicyChecker,
    blacklist_injected: bool,
}

impl PolicyBuilder {
    fn new<I, S>(obvious: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let obvious: Vec<String> = obvious.into_iter().map(Into::into).collect();
        Self {
            policy: PolicyChecker {
                min_length: MIN_LENGTH,
                confirmation: None,
                previous_hashes: None,
                obvious: obvious.into(),
                requirements: Requirements::new(),
                blacklist: Arc::new(Blacklist::default()),
                verifier: Arc::new(PlatformVerifier),
            },
            blacklist_injected: false,
        }
    }

    /// Requires the candidate to equal `value` exactly.
    pub fn confirmation(mut self, value: SecretString) -> Self {
        self.policy.confirmation = Some(Arc::new(value));
        self
    }

    /// Enables the reuse check against `hashes`.
    ///
    /// An empty list still enables the check; it simply never matches.
    pub fn previous_passwords<I, S>(mut self, hashes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy.previous_hashes = Some(hashes.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the minimum length. Values below [`MIN_LENGTH`] are ignored.
    pub fn min_length(mut self, value: usize) -> Self {
        if value < MIN_LENGTH {
            #[cfg(feature = "tracing")]
            tracing::debug!("Ignoring min_length {} below floor {}", value, MIN_LENGTH);
            return self;
        }
        self.policy.min_length = value;
        self
    }

    /// Replaces the enabled complexity requirements.
    pub fn complexity_requirements<I>(mut self, requirements: I) -> Self
    where
        I: IntoIterator<Item = Requirement>,
    {
        self.policy.requirements = requirements.into_iter().collect();
        self
    }

    /// Uses `blacklist` instead of the process-wide one.
    pub fn blacklist(mut self, blacklist: Arc<Blacklist>) -> Self {
        self.policy.blacklist = blacklist;
        self.blacklist_injected = true;
        self
    }

    /// Uses `verifier` for the reuse check instead of [`PlatformVerifier`].
    pub fn verifier<V: HashVerifier + 'static>(mut self, verifier: V) -> Self {
        self.policy.verifier = Arc::new(verifier);
        self
    }

    /// Finishes the policy.
    ///
    /// Without an injected blacklist, the process-wide one is used when it
    /// has been initialized; otherwise no password is considered common.
    pub fn build(self) -> PolicyChecker {
        let mut policy = self.policy;
        if !self.blacklist_injected {
            if let Some(shared) = shared_blacklist() {
                policy.blacklist = shared;
            }
        }
        policy
    }
}

impl fmt::Debug for PolicyBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyBuilder")
            .field("policy", &self.policy)
            .field("blacklist_injected", &self.blacklist_injected)
            .finish()
    }
}
