//! Locally persisted session state.
//!
//! The analog of the browser-local storage the admin UI relies on: a flat
//! string key/value map holding the signed-in email, the auth user id, the
//! password-hash mirror, and the cached profile JSON blob. Informal by
//! design - no schema version, no migration path; unknown keys survive
//! round-trips untouched.
//!
//! Backed by an in-memory map with optional JSON file persistence so state
//! survives a restart. Reads are synchronous and never touch the network,
//! which is what lets the route guard run before any handler without
//! blocking.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

/// Well-known session keys.
pub mod keys {
    /// Email the administrator signed in with.
    pub const EMAIL: &str = "email";
    /// Auth-service user id from the sign-in response.
    pub const USER_ID: &str = "user_id";
    /// Local password-hash mirror (see `crate::credential`).
    pub const PASSWORD_HASH: &str = "password_hash";
    /// Cached profile row as a JSON blob.
    pub const USER_DATA: &str = "user_data";
}

/// Errors from reading or persisting session state.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug)]
struct Inner {
    values: BTreeMap<String, String>,
    /// When set, every mutation is written back to this file.
    path: Option<PathBuf>,
}

/// The local session store.
///
/// Mutations persist immediately when a backing file is configured; a failed
/// write surfaces as an error rather than silently dropping state.
#[derive(Debug)]
pub struct SessionStore {
    inner: Mutex<Inner>,
}

impl SessionStore {
    /// Create a purely in-memory store (used in tests and ephemeral runs).
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            inner: Mutex::new(Inner {
                values: BTreeMap::new(),
                path: None,
            }),
        }
    }

    /// Open a file-backed store, loading existing state if the file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            inner: Mutex::new(Inner {
                values,
                path: Some(path),
            }),
        })
    }

    /// Read a value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let inner = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        inner.values.get(key).cloned()
    }

    /// Whether a key is present (with a non-empty value).
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }

    /// Write a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing file cannot be written.
    pub fn set(&self, key: &str, value: impl Into<String>) -> Result<(), SessionError> {
        let mut inner = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        inner.values.insert(key.to_string(), value.into());
        Self::persist(&inner)
    }

    /// Remove a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing file cannot be written.
    pub fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut inner = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        inner.values.remove(key);
        Self::persist(&inner)
    }

    /// Drop every stored key.
    ///
    /// Used by logout and by the route guard's forced-logout path so the
    /// email marker, mirror, and cached profile always clear together.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing file cannot be written.
    pub fn clear(&self) -> Result<(), SessionError> {
        let mut inner = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        inner.values.clear();
        Self::persist(&inner)
    }

    fn persist(inner: &Inner) -> Result<(), SessionError> {
        let Some(path) = &inner.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        let contents = serde_json::to_string_pretty(&inner.values)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

fn ensure_dir(parent: &Path) -> std::io::Result<()> {
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(parent)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_roundtrip() {
        let store = SessionStore::in_memory();
        assert!(store.get(keys::EMAIL).is_none());

        store.set(keys::EMAIL, "admin@secondxe.example").unwrap();
        assert_eq!(store.get(keys::EMAIL).unwrap(), "admin@secondxe.example");
        assert!(store.contains(keys::EMAIL));

        store.remove(keys::EMAIL).unwrap();
        assert!(!store.contains(keys::EMAIL));
    }

    #[test]
    fn test_clear_drops_all_keys() {
        let store = SessionStore::in_memory();
        store.set(keys::EMAIL, "a@b.c").unwrap();
        store.set(keys::PASSWORD_HASH, "$argon2id$...").unwrap();
        store.clear().unwrap();
        assert!(!store.contains(keys::EMAIL));
        assert!(!store.contains(keys::PASSWORD_HASH));
    }

    #[test]
    fn test_empty_value_counts_as_absent() {
        let store = SessionStore::in_memory();
        store.set(keys::USER_ID, "").unwrap();
        assert!(!store.contains(keys::USER_ID));
    }

    #[test]
    fn test_file_persistence_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        {
            let store = SessionStore::open(&path).unwrap();
            store.set(keys::EMAIL, "admin@secondxe.example").unwrap();
            store.set(keys::USER_ID, "7f9c24e5").unwrap();
        }

        let reopened = SessionStore::open(&path).unwrap();
        assert_eq!(reopened.get(keys::EMAIL).unwrap(), "admin@secondxe.example");
        assert_eq!(reopened.get(keys::USER_ID).unwrap(), "7f9c24e5");
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path().join("absent.json")).unwrap();
        assert!(store.get(keys::EMAIL).is_none());
    }
}
