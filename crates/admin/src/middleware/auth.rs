//! Authentication extractors for protected routes.
//!
//! Every protected handler takes [`RequireAdmin`], which runs the role
//! gate against the local session before the handler body executes.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    guard::{self, GateDecision},
    models::Account,
    state::AppState,
};

/// Extractor that requires a signed-in admin.
///
/// If the gate rejects, API requests get 401 Unauthorized and page
/// requests are redirected to the login page. Either way the local
/// session markers have already been cleared by the gate.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdmin(admin): RequireAdmin,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.name)
/// }
/// ```
pub struct RequireAdmin(pub Account);

/// Rejection when the role gate turns the request away.
pub enum AdminGateRejection {
    /// Redirect to the login page (for page requests).
    RedirectToLogin,
    /// Unauthorized response (for API requests).
    Unauthorized,
}

impl IntoResponse for AdminGateRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/login").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AdminGateRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let is_api = parts.uri.path().starts_with("/api/");
        let reject = || {
            if is_api {
                AdminGateRejection::Unauthorized
            } else {
                AdminGateRejection::RedirectToLogin
            }
        };

        if guard::check(state.session()) != GateDecision::Allowed {
            return Err(reject());
        }

        // The gate already proved the cached profile exists and is admin.
        let admin = state
            .auth_service()
            .cached_profile()
            .ok_or_else(reject)?;

        Ok(Self(admin))
    }
}
