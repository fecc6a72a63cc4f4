//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                      - Health check
//!
//! # Auth
//! POST /login                       - Sign in with email and password
//! POST /logout                      - Sign out
//!
//! # Dashboard
//! GET  /api/dashboard               - Counts, total profit, 30-day chart
//!
//! # Accounts
//! GET    /api/accounts              - List accounts
//! POST   /api/accounts              - Create account row
//! GET    /api/accounts/{id}         - Account detail
//! PUT    /api/accounts/{id}         - Update account
//! DELETE /api/accounts/{id}         - Delete account
//!
//! # Posts
//! GET    /api/posts                 - List posts (projected columns)
//! GET    /api/posts/pending         - Posts awaiting moderation
//! GET    /api/posts/{id}            - Full post detail
//! PUT    /api/posts/{id}            - Update post
//! DELETE /api/posts/{id}            - Delete post
//! POST   /api/posts/{id}/approve    - Pending -> available
//! POST   /api/posts/{id}/reject     - -> expired
//!
//! # Payments
//! GET    /api/payments              - List payments
//! POST   /api/payments              - Create payment row
//! GET    /api/payments/{id}         - Payment detail
//! PUT    /api/payments/{id}         - Update payment
//! DELETE /api/payments/{id}         - Delete payment
//!
//! # Reports
//! GET    /api/reports               - List reports
//! GET    /api/reports/{id}          - Report detail
//! PUT    /api/reports/{id}          - Update report
//! DELETE /api/reports/{id}          - Delete report
//! POST   /api/reports/{id}/resolve  - -> resolved
//! POST   /api/reports/{id}/reject   - -> rejected
//!
//! # Settings
//! POST /api/settings/password       - Change the admin password
//! ```

use axum::{Json, Router, routing::get};

use crate::state::AppState;

pub mod accounts;
pub mod auth;
pub mod dashboard;
pub mod payments;
pub mod posts;
pub mod reports;
pub mod settings;

/// Build the full application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(auth::router())
        .merge(dashboard::router())
        .merge(accounts::router())
        .merge(posts::router())
        .merge(payments::router())
        .merge(reports::router())
        .merge(settings::router())
}

/// Health check endpoint.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
