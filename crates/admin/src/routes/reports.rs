//! Report API handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use secondxe_core::ReportId;

use crate::{
    error::AppError,
    middleware::RequireAdmin,
    models::{Report, ReportPatch},
    state::AppState,
};

/// Build the reports router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/reports", get(list))
        .route(
            "/api/reports/{id}",
            get(detail).put(update).delete(remove),
        )
        .route("/api/reports/{id}/resolve", post(resolve))
        .route("/api/reports/{id}/reject", post(reject))
}

/// List all reports.
///
/// # Errors
///
/// Returns an error if the backend call fails.
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Report>>, AppError> {
    let reports = state.report_service().fetch_all().await?;
    Ok(Json(reports))
}

/// Fetch one report.
///
/// # Errors
///
/// Returns 404 if the row does not exist.
pub async fn detail(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<ReportId>,
) -> Result<Json<Report>, AppError> {
    let report = state.report_service().fetch_by_id(id).await?;
    Ok(Json(report))
}

/// Apply a partial update to a report.
///
/// # Errors
///
/// Returns an error if the backend rejects the patch.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<ReportId>,
    Json(patch): Json<ReportPatch>,
) -> Result<Json<Report>, AppError> {
    let report = state.report_service().update(id, &patch).await?;
    Ok(Json(report))
}

/// Mark a report resolved.
///
/// # Errors
///
/// Returns 404 if the row does not exist.
pub async fn resolve(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<ReportId>,
) -> Result<Json<Report>, AppError> {
    let report = state.report_service().resolve(id).await?;
    Ok(Json(report))
}

/// Reject a report.
///
/// # Errors
///
/// Returns 404 if the row does not exist.
pub async fn reject(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<ReportId>,
) -> Result<Json<Report>, AppError> {
    let report = state.report_service().reject(id).await?;
    Ok(Json(report))
}

/// Delete a report row.
///
/// # Errors
///
/// Returns 404 if the row does not exist.
pub async fn remove(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<ReportId>,
) -> Result<Json<Report>, AppError> {
    let report = state.report_service().delete(id).await?;
    Ok(Json(report))
}
