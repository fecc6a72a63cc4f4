//! Unified error handling for the admin panel.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::backend::BackendError;
use crate::services::AuthError;
use crate::session::SessionError;

/// Application-level error type for the admin panel.
#[derive(Debug, Error)]
pub enum AppError {
    /// Hosted backend call failed.
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Authentication flow failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Session store operation failed.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Caller lacks permission.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request payload failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Backend(e) => match e {
                BackendError::NotFound(_) => StatusCode::NOT_FOUND,
                BackendError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
                _ => StatusCode::BAD_GATEWAY,
            },
            Self::Auth(e) => match e {
                AuthError::Forbidden => StatusCode::FORBIDDEN,
                AuthError::NotSignedIn => StatusCode::UNAUTHORIZED,
                AuthError::CurrentPasswordIncorrect | AuthError::PasswordTooShort { .. } => {
                    StatusCode::BAD_REQUEST
                }
                AuthError::Backend(BackendError::Unauthorized(_)) => StatusCode::UNAUTHORIZED,
                // Missing profile row at sign-in: no role evidence
                AuthError::Backend(BackendError::NotFound(_)) => StatusCode::FORBIDDEN,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Session(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::BadRequest(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log server errors with Sentry
        if status.is_server_error() || status == StatusCode::BAD_GATEWAY {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Admin request error"
            );
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Session(_) | Self::Internal(_) => "Internal server error".to_string(),
            Self::Backend(e) if status == StatusCode::BAD_GATEWAY => {
                tracing::warn!(error = %e, "backend call failed");
                "Backend service error".to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Set the Sentry user context from a signed-in admin.
pub fn set_sentry_user(user_id: &str, email: Option<&str>) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            email: email.map(String::from),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("post 42".to_string());
        assert_eq!(err.to_string(), "Not found: post 42");

        let err = AppError::BadRequest("invalid status".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid status");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            AppError::NotFound("test".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Unauthorized("test".to_string()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Forbidden("test".to_string()).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::Validation("test".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal("test".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_backend_error_statuses() {
        assert_eq!(
            AppError::Backend(BackendError::NotFound("row".to_string())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Backend(BackendError::Unauthorized("nope".to_string())).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Backend(BackendError::Api {
                status: 500,
                message: "boom".to_string()
            })
            .status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_auth_error_statuses() {
        assert_eq!(AppError::Auth(AuthError::Forbidden).status(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::Auth(AuthError::NotSignedIn).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Auth(AuthError::CurrentPasswordIncorrect).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
