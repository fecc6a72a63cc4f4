//! Account API handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use secondxe_core::AccountId;

use crate::{
    error::AppError,
    middleware::RequireAdmin,
    models::{Account, AccountPatch, NewAccount},
    state::AppState,
};

/// Build the accounts router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/accounts", get(list).post(create))
        .route(
            "/api/accounts/{id}",
            get(detail).put(update).delete(remove),
        )
}

/// List all accounts.
///
/// # Errors
///
/// Returns an error if the backend call fails.
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = state.account_service().fetch_all().await?;
    Ok(Json(accounts))
}

/// Create an account row.
///
/// # Errors
///
/// Returns an error if the backend rejects the row.
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(body): Json<NewAccount>,
) -> Result<Json<Account>, AppError> {
    let account = state.account_service().create(&body).await?;
    Ok(Json(account))
}

/// Fetch one account.
///
/// # Errors
///
/// Returns 404 if the row does not exist.
pub async fn detail(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
) -> Result<Json<Account>, AppError> {
    let account = state.account_service().fetch_by_id(id).await?;
    Ok(Json(account))
}

/// Apply a partial update to an account.
///
/// # Errors
///
/// Returns an error if the backend rejects the patch.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
    Json(patch): Json<AccountPatch>,
) -> Result<Json<Account>, AppError> {
    let account = state.account_service().update(id, &patch).await?;
    Ok(Json(account))
}

/// Delete an account row.
///
/// # Errors
///
/// Returns 404 if the row does not exist.
pub async fn remove(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
) -> Result<Json<Account>, AppError> {
    let account = state.account_service().delete(id).await?;
    Ok(Json(account))
}
