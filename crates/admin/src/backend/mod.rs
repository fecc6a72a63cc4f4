//! Client for the hosted backend service.
//!
//! All authoritative data for the marketplace lives in a hosted
//! backend-as-a-service exposing two surfaces:
//!
//! - a table API (`/rest/v1/{table}`) with column projection, equality and
//!   range filters, and exact-count head requests
//! - an auth API (`/auth/v1/*`) with password sign-in, sign-out, and
//!   password update
//!
//! The admin never talks to a database of its own; every read and write in
//! this crate goes through [`DataClient`] or [`AuthClient`]. Calls are
//! single-attempt with no retry or backoff - a failure is surfaced to the
//! caller with the remote service's message string intact.

mod auth;
mod client;
pub mod query;

pub use auth::{AuthClient, AuthSession, AuthUser};
pub use client::DataClient;
pub use query::SelectQuery;

use thiserror::Error;

/// Errors that can occur when talking to the hosted backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service responded with an error payload.
    ///
    /// The message is the remote service's own string, passed through
    /// verbatim so callers can surface it unmodified.
    #[error("{message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Remote error message, verbatim.
        message: String,
    },

    /// Response body could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The requested row does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Credentials were rejected by the auth surface.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl BackendError {
    /// The user-facing message for this error.
    ///
    /// For the variants carrying a remote message ([`BackendError::Api`],
    /// [`BackendError::NotFound`], [`BackendError::Unauthorized`]) this is
    /// that message verbatim, without the `Display` prefix used in logs.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::NotFound(message) | Self::Unauthorized(message) => message.clone(),
            Self::Http(_) | Self::Parse(_) => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_is_verbatim() {
        let err = BackendError::Api {
            status: 400,
            message: "JSON object requested, multiple (or no) rows returned".to_string(),
        };
        assert_eq!(
            err.message(),
            "JSON object requested, multiple (or no) rows returned"
        );
    }

    #[test]
    fn test_not_found_display() {
        let err = BackendError::NotFound("VehiclePost id=9".to_string());
        assert_eq!(err.to_string(), "Not found: VehiclePost id=9");
    }

    #[test]
    fn test_unauthorized_display() {
        let err = BackendError::Unauthorized("Invalid login credentials".to_string());
        assert_eq!(err.to_string(), "Unauthorized: Invalid login credentials");
    }

    #[test]
    fn test_message_has_no_display_prefix() {
        // Stores surface these strings to the operator unmodified
        let err = BackendError::Unauthorized("Invalid login credentials".to_string());
        assert_eq!(err.message(), "Invalid login credentials");

        let err = BackendError::NotFound("VehiclePost id=9".to_string());
        assert_eq!(err.message(), "VehiclePost id=9");
    }
}
