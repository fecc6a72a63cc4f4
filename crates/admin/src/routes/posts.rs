//! Vehicle post API handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use secondxe_core::PostId;

use crate::{
    error::AppError,
    middleware::RequireAdmin,
    models::{Post, PostPatch, PostSummary},
    state::AppState,
};

/// Build the posts router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/posts", get(list))
        .route("/api/posts/pending", get(pending))
        .route("/api/posts/{id}", get(detail).put(update).delete(remove))
        .route("/api/posts/{id}/approve", post(approve))
        .route("/api/posts/{id}/reject", post(reject))
}

/// List all posts with the projected listing columns.
///
/// # Errors
///
/// Returns an error if the backend call fails.
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<PostSummary>>, AppError> {
    let posts = state.post_service().fetch_all().await?;
    Ok(Json(posts))
}

/// List posts awaiting moderation.
///
/// # Errors
///
/// Returns an error if the backend call fails.
pub async fn pending(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<PostSummary>>, AppError> {
    let posts = state.post_service().fetch_pending().await?;
    Ok(Json(posts))
}

/// Fetch one post with all columns.
///
/// # Errors
///
/// Returns 404 if the row does not exist.
pub async fn detail(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<PostId>,
) -> Result<Json<Post>, AppError> {
    let post = state.post_service().fetch_by_id(id).await?;
    Ok(Json(post))
}

/// Apply a partial update to a post.
///
/// # Errors
///
/// Returns an error if the backend rejects the patch.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<PostId>,
    Json(patch): Json<PostPatch>,
) -> Result<Json<PostSummary>, AppError> {
    let post = state.post_service().update(id, &patch).await?;
    Ok(Json(post))
}

/// Approve a pending post, making it publicly available.
///
/// # Errors
///
/// Returns 404 if the row does not exist.
pub async fn approve(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<PostId>,
) -> Result<Json<PostSummary>, AppError> {
    let post = state.post_service().approve(id).await?;
    Ok(Json(post))
}

/// Reject a post, expiring it.
///
/// # Errors
///
/// Returns 404 if the row does not exist.
pub async fn reject(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<PostId>,
) -> Result<Json<PostSummary>, AppError> {
    let post = state.post_service().reject(id).await?;
    Ok(Json(post))
}

/// Delete a post row.
///
/// # Errors
///
/// Returns 404 if the row does not exist.
pub async fn remove(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<PostId>,
) -> Result<Json<PostSummary>, AppError> {
    let post = state.post_service().delete(id).await?;
    Ok(Json(post))
}
