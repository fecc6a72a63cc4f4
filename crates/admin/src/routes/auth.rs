//! Sign-in and sign-out handlers.

use axum::{Json, Router, extract::State, routing::post};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use secondxe_core::Email;

use crate::{error::AppError, models::Account, state::AppState};

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
}

/// Sign-in request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: SecretString,
}

/// Sign-in response: the cached admin profile.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: Account,
}

/// Sign an administrator in.
///
/// Rejects non-admin accounts with 403 after forcing a local logout, so a
/// successful response always corresponds to an admin session.
///
/// # Errors
///
/// Returns an error if the hosted service rejects the credentials or the
/// account is not an admin.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    // Reject structurally invalid emails before hitting the auth endpoint
    let email = Email::parse(&body.email).map_err(|e| AppError::Validation(e.to_string()))?;

    let user = state
        .auth_service()
        .sign_in(email.as_str(), &body.password)
        .await?;

    crate::error::set_sentry_user(&user.id.to_string(), Some(user.email.as_str()));

    Ok(Json(LoginResponse { user }))
}

/// Sign out.
///
/// Always clears the local session; a failed remote revocation is logged
/// and does not fail the request.
///
/// # Errors
///
/// Returns an error only if local session state cannot be cleared.
pub async fn logout(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    state.auth_service().logout().await?;
    crate::error::clear_sentry_user();
    Ok(Json(serde_json::json!({ "success": true })))
}
