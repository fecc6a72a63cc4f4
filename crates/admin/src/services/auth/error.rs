//! Auth service errors.

use thiserror::Error;

use crate::backend::BackendError;
use crate::credential::CredentialError;
use crate::session::SessionError;

/// Errors from sign-in, logout, and password change.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The hosted service rejected the call.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Local session state could not be read or written.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The credential mirror could not be written.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// Authenticated, but the profile is not an admin.
    #[error("Access denied. Admin privileges required.")]
    Forbidden,

    /// The supplied current password did not verify.
    #[error("Current password is incorrect")]
    CurrentPasswordIncorrect,

    /// New password failed the local form check.
    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },

    /// An operation that needs a signed-in session was called without one.
    #[error("Not signed in")]
    NotSignedIn,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_message_matches_login_page() {
        assert_eq!(
            AuthError::Forbidden.to_string(),
            "Access denied. Admin privileges required."
        );
    }

    #[test]
    fn test_too_short_names_minimum() {
        let err = AuthError::PasswordTooShort { min: 8 };
        assert_eq!(err.to_string(), "Password must be at least 8 characters long");
    }
}
