//! Local password-hash mirror.
//!
//! On sign-in the admin stores a salted Argon2id hash of the password in the
//! local session store so a "current password" field can be checked without
//! a network round trip.
//!
//! # Trust boundary
//!
//! This mirror is NOT an authority on credentials - the hosted auth service
//! is. Persisting a password-derived secret client-side duplicates
//! credential checking outside the auth service, so the password-change flow
//! deliberately re-verifies the current password against the auth service
//! (see `services::auth`) instead of trusting this mirror. The mirror
//! remains only as the fast local check, and it fails closed: no stored
//! hash, or a hash that does not parse, verifies as false.
//!
//! The hash and the signed-in email are cleared together on logout.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::session::{SessionError, SessionStore, keys};

/// Errors from writing the mirror.
///
/// Verification deliberately has no error type - every failure mode reads
/// as "not verified".
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("failed to hash password: {0}")]
    Hash(String),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// The local credential mirror, keyed under a fixed session key.
pub struct CredentialMirror<'a> {
    session: &'a SessionStore,
}

impl<'a> CredentialMirror<'a> {
    /// Wrap a session store.
    #[must_use]
    pub const fn new(session: &'a SessionStore) -> Self {
        Self { session }
    }

    /// Hash the password with a fresh random salt and store the result.
    ///
    /// # Errors
    ///
    /// Returns an error if hashing fails or the session store cannot be
    /// written.
    pub fn store(&self, password: &SecretString) -> Result<(), CredentialError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.expose_secret().as_bytes(), &salt)
            .map_err(|e| CredentialError::Hash(e.to_string()))?;

        self.session.set(keys::PASSWORD_HASH, hash.to_string())?;
        Ok(())
    }

    /// Check a password against the stored hash.
    ///
    /// The salt parameters are embedded in the stored hash string, so the
    /// supplied plaintext is re-hashed with the same parameters and compared.
    /// Returns `false` when no hash is stored (fail closed, forcing
    /// re-authentication).
    #[must_use]
    pub fn verify(&self, password: &SecretString) -> bool {
        let Some(stored) = self.session.get(keys::PASSWORD_HASH) else {
            return false;
        };

        let Ok(parsed) = PasswordHash::new(&stored) else {
            tracing::warn!("stored password hash did not parse; treating as unverified");
            return false;
        };

        Argon2::default()
            .verify_password(password.expose_secret().as_bytes(), &parsed)
            .is_ok()
    }

    /// Erase the stored hash.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be written.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.session.remove(keys::PASSWORD_HASH)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_string())
    }

    #[test]
    fn test_verify_after_store() {
        let session = SessionStore::in_memory();
        let mirror = CredentialMirror::new(&session);

        mirror.store(&secret("abcd1234")).unwrap();
        assert!(mirror.verify(&secret("abcd1234")));
        assert!(!mirror.verify(&secret("wrong")));
    }

    #[test]
    fn test_verify_without_stored_hash_fails_closed() {
        let session = SessionStore::in_memory();
        let mirror = CredentialMirror::new(&session);
        assert!(!mirror.verify(&secret("anything")));
    }

    #[test]
    fn test_verify_garbage_hash_fails_closed() {
        let session = SessionStore::in_memory();
        session.set(keys::PASSWORD_HASH, "not-a-phc-string").unwrap();
        let mirror = CredentialMirror::new(&session);
        assert!(!mirror.verify(&secret("abcd1234")));
    }

    #[test]
    fn test_clear_forgets_password() {
        let session = SessionStore::in_memory();
        let mirror = CredentialMirror::new(&session);

        mirror.store(&secret("abcd1234")).unwrap();
        mirror.clear().unwrap();
        assert!(!mirror.verify(&secret("abcd1234")));
    }

    #[test]
    fn test_store_replaces_previous_password() {
        let session = SessionStore::in_memory();
        let mirror = CredentialMirror::new(&session);

        mirror.store(&secret("old-password")).unwrap();
        mirror.store(&secret("new-password")).unwrap();
        assert!(!mirror.verify(&secret("old-password")));
        assert!(mirror.verify(&secret("new-password")));
    }

    #[test]
    fn test_salts_are_unique_per_store() {
        let session = SessionStore::in_memory();
        let mirror = CredentialMirror::new(&session);

        mirror.store(&secret("abcd1234")).unwrap();
        let first = session.get(keys::PASSWORD_HASH).unwrap();
        mirror.store(&secret("abcd1234")).unwrap();
        let second = session.get(keys::PASSWORD_HASH).unwrap();
        assert_ne!(first, second);
    }
}
