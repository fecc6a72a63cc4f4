//! Integration tests for the admin sign-in flow.
//!
//! These tests require:
//! - The admin server running (cargo run -p secondxe-admin)
//! - A test backend project with an admin and a regular account seeded
//! - `TEST_ADMIN_EMAIL` / `TEST_ADMIN_PASSWORD` in the environment
//!
//! Run with: cargo test -p secondxe-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

/// Base URL for the admin API (configurable via environment).
fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

fn admin_credentials() -> (String, String) {
    let email = std::env::var("TEST_ADMIN_EMAIL").expect("TEST_ADMIN_EMAIL not set");
    let password = std::env::var("TEST_ADMIN_PASSWORD").expect("TEST_ADMIN_PASSWORD not set");
    (email, password)
}

async fn sign_in(client: &Client) -> Value {
    let (email, password) = admin_credentials();
    let resp = client
        .post(format!("{}/login", admin_base_url()))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to reach admin server");

    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("Login response was not JSON")
}

#[tokio::test]
#[ignore = "Requires running admin server and backend credentials"]
async fn test_health_endpoint() {
    let client = Client::new();
    let resp = client
        .get(format!("{}/health", admin_base_url()))
        .send()
        .await
        .expect("Failed to reach admin server");

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running admin server and backend credentials"]
async fn test_login_returns_admin_profile() {
    let client = Client::new();
    let body = sign_in(&client).await;

    let user = &body["user"];
    assert_eq!(user["role"], "admin");
    assert!(user["email"].as_str().is_some());
}

#[tokio::test]
#[ignore = "Requires running admin server and backend credentials"]
async fn test_login_rejects_bad_password() {
    let client = Client::new();
    let (email, _) = admin_credentials();

    let resp = client
        .post(format!("{}/login", admin_base_url()))
        .json(&json!({ "email": email, "password": "definitely-wrong" }))
        .send()
        .await
        .expect("Failed to reach admin server");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running admin server and backend credentials"]
async fn test_api_requires_session() {
    let client = Client::new();

    // Fresh server-side session: logout first so no markers remain
    let _ = client
        .post(format!("{}/logout", admin_base_url()))
        .send()
        .await;

    let resp = client
        .get(format!("{}/api/dashboard", admin_base_url()))
        .send()
        .await
        .expect("Failed to reach admin server");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running admin server and backend credentials"]
async fn test_logout_clears_session() {
    let client = Client::new();
    sign_in(&client).await;

    let resp = client
        .post(format!("{}/logout", admin_base_url()))
        .send()
        .await
        .expect("Failed to reach admin server");
    assert_eq!(resp.status(), StatusCode::OK);

    // Protected API routes reject after logout
    let resp = client
        .get(format!("{}/api/accounts", admin_base_url()))
        .send()
        .await
        .expect("Failed to reach admin server");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
