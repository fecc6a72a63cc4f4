//! Settings API handlers.

use axum::{Json, Router, extract::State, routing::post};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::{error::AppError, middleware::RequireAdmin, state::AppState};

/// Build the settings router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/settings/password", post(change_password))
}

/// Password change request body.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: SecretString,
    pub new_password: SecretString,
}

/// Password change response.
#[derive(Debug, Serialize)]
pub struct ChangePasswordResponse {
    pub success: bool,
}

/// Change the signed-in administrator's password.
///
/// The current password is verified against the hosted auth service, not
/// the local mirror; the mirror is refreshed on success.
///
/// # Errors
///
/// Returns 400 if the current password is wrong or the new password fails
/// validation, 401 if no session is active.
pub async fn change_password(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(body): Json<ChangePasswordRequest>,
) -> Result<Json<ChangePasswordResponse>, AppError> {
    state
        .auth_service()
        .change_password(&body.current_password, &body.new_password)
        .await?;

    Ok(Json(ChangePasswordResponse { success: true }))
}
