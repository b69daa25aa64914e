//! Blacklist management module
//!
//! Holds the set of known-common passwords and, optionally, a process-wide
//! copy loaded once at startup.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;

const BLACKLIST_PATH_ENV: &str = "PWD_BLACKLIST_PATH";
const DEFAULT_BLACKLIST_PATH: &str = "./assets/password-blacklist.txt";

static SHARED_BLACKLIST: RwLock<Option<Arc<Blacklist>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Case-insensitive set of passwords that are rejected outright.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Blacklist {
    /// Builds a blacklist from already-parsed entries.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        entries.into_iter().collect()
    }

    /// Parses line-delimited content. Blank lines are skipped.
    pub fn parse(content: &str) -> Self {
        content.lines().collect()
    }

    /// Loads a line-delimited blacklist file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: file not found {:?}", path);
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let blacklist = Self::parse(&content);

        if blacklist.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: empty file {:?}", path);
            return Err(BlacklistError::EmptyFile);
        }

        Ok(blacklist)
    }

    /// Returns `true` if `password` is blacklisted, ignoring case.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&normalize(password))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Blacklist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|entry| normalize(entry.as_ref().trim()))
            .filter(|entry| !entry.is_empty())
            .collect();
        Self { entries }
    }
}

fn normalize(password: &str) -> String {
    password.to_lowercase()
}

/// Returns the blacklist file path.
///
/// Priority:
/// 1. Environment variable `PWD_BLACKLIST_PATH`
/// 2. Default path `./assets/password-blacklist.txt`
pub fn get_blacklist_path() -> PathBuf {
    std::env::var(BLACKLIST_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_BLACKLIST_PATH))
}

/// Initializes the process-wide blacklist from the configured file.
///
/// Set `PWD_BLACKLIST_PATH` to override the default location. Calling this
/// again after a successful load is a no-op returning the loaded count.
///
/// # Example
///
/// ```rust,ignore
/// unsafe { std::env::set_var("PWD_BLACKLIST_PATH", "/etc/myapp/blacklist.txt"); }
/// pwd_policy::init_blacklist()?;
/// ```
pub fn init_blacklist() -> Result<usize, BlacklistError> {
    init_blacklist_from_path(get_blacklist_path())
}

/// Initializes the process-wide blacklist from a specific file path.
pub fn init_blacklist_from_path<P: AsRef<Path>>(path: P) -> Result<usize, BlacklistError> {
    if let Some(existing) = shared_blacklist() {
        return Ok(existing.len());
    }

    let path = path.as_ref();
    let blacklist = Blacklist::from_path(path)?;
    let count = blacklist.len();

    let mut guard = SHARED_BLACKLIST
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    // Another thread may have won the race while we were reading the file.
    if let Some(existing) = guard.as_ref() {
        return Ok(existing.len());
    }
    *guard = Some(Arc::new(blacklist));

    #[cfg(feature = "tracing")]
    tracing::info!("Blacklist initialized: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Returns the process-wide blacklist, or `None` if it was never initialized.
pub fn shared_blacklist() -> Option<Arc<Blacklist>> {
    SHARED_BLACKLIST
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Checks a password against the process-wide blacklist.
///
/// Returns `false` if the blacklist is not initialized.
pub fn is_blacklisted(password: &str) -> bool {
    shared_blacklist()
        .map(|bl| bl.contains(password))
        .unwrap_or(false)
}

/// Resets the process-wide blacklist for testing purposes.
#[cfg(test)]
pub fn reset_blacklist_for_testing() {
    let mut guard = SHARED_BLACKLIST
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}
