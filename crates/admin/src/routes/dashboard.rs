//! Dashboard API handler.

use axum::{Json, Router, extract::State, routing::get};

use crate::{
    middleware::RequireAdmin, services::DashboardSnapshot, state::AppState,
};

/// Build the dashboard router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/dashboard", get(fetch))
}

/// Refresh and return the dashboard snapshot.
///
/// Slot fetches run concurrently; a failed slot keeps its previous value
/// and the snapshot carries the failure message.
pub async fn fetch(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Json<DashboardSnapshot> {
    Json(state.dashboard_service().fetch_all().await)
}
