//! Payment API handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use secondxe_core::PaymentId;

use crate::{
    error::AppError,
    middleware::RequireAdmin,
    models::{NewPayment, Payment, PaymentPatch},
    state::AppState,
};

/// Build the payments router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/payments", get(list).post(create))
        .route(
            "/api/payments/{id}",
            get(detail).put(update).delete(remove),
        )
}

/// List all payments.
///
/// # Errors
///
/// Returns an error if the backend call fails.
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Payment>>, AppError> {
    let payments = state.payment_service().fetch_all().await?;
    Ok(Json(payments))
}

/// Create a payment row.
///
/// # Errors
///
/// Returns an error if the backend rejects the row.
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(body): Json<NewPayment>,
) -> Result<Json<Payment>, AppError> {
    let payment = state.payment_service().create(&body).await?;
    Ok(Json(payment))
}

/// Fetch one payment.
///
/// # Errors
///
/// Returns 404 if the row does not exist.
pub async fn detail(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<PaymentId>,
) -> Result<Json<Payment>, AppError> {
    let payment = state.payment_service().fetch_by_id(id).await?;
    Ok(Json(payment))
}

/// Apply a partial update to a payment.
///
/// # Errors
///
/// Returns an error if the backend rejects the patch.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<PaymentId>,
    Json(patch): Json<PaymentPatch>,
) -> Result<Json<Payment>, AppError> {
    let payment = state.payment_service().update(id, &patch).await?;
    Ok(Json(payment))
}

/// Delete a payment row.
///
/// # Errors
///
/// Returns 404 if the row does not exist.
pub async fn remove(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<PaymentId>,
) -> Result<Json<Payment>, AppError> {
    let payment = state.payment_service().delete(id).await?;
    Ok(Json(payment))
}
