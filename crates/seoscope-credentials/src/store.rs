//! The credential store interface and the in-memory implementation.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::errors::CredentialError;

/// Well-known key under which the service credential is stored.
pub const CREDENTIAL_KEY: &str = "gemini-api-key";

/// Minimum credential length; anything at or below this is treated as absent.
pub const MIN_CREDENTIAL_LENGTH: usize = 10;

/// Whether a stored value is long enough to plausibly be a real credential.
///
/// This is a cheap local sanity check, not verification against the remote
/// service.
#[must_use]
pub fn meets_minimum_length(value: &str) -> bool {
    value.len() > MIN_CREDENTIAL_LENGTH
}

/// Generic key-value credential storage.
///
/// The orchestration core consumes this interface; it never mutates stored
/// values and reads at most once per invocation.
pub trait CredentialStore: Send + Sync {
    /// Read a value, or `None` if the key is absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value under the key, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), CredentialError>;
}

/// In-process credential store backed by a map.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the service credential.
    #[must_use]
    pub fn with_credential(value: &str) -> Self {
        let store = Self::new();
        let _ = store.entries.write().insert(CREDENTIAL_KEY.to_string(), value.to_string());
        store
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CredentialError> {
        let _ = self
            .entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_missing_key_returns_none() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.get(CREDENTIAL_KEY), None);
    }

    #[test]
    fn set_then_get_roundtrip() {
        let store = MemoryCredentialStore::new();
        store.set(CREDENTIAL_KEY, "AIzaSyExample123").unwrap();
        assert_eq!(store.get(CREDENTIAL_KEY).as_deref(), Some("AIzaSyExample123"));
    }

    #[test]
    fn set_replaces_previous_value() {
        let store = MemoryCredentialStore::new();
        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("second"));
    }

    #[test]
    fn with_credential_populates_the_well_known_key() {
        let store = MemoryCredentialStore::with_credential("AIzaSyExample123");
        assert_eq!(store.get(CREDENTIAL_KEY).as_deref(), Some("AIzaSyExample123"));
    }

    #[test]
    fn minimum_length_is_exclusive() {
        assert!(!meets_minimum_length(""));
        assert!(!meets_minimum_length("short"));
        assert!(!meets_minimum_length("0123456789")); // exactly 10
        assert!(meets_minimum_length("0123456789a")); // 11
    }
}
