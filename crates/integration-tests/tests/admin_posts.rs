//! Integration tests for post moderation.
//!
//! These tests require:
//! - The admin server running with a signed-in admin session
//!   (run the sign-in test first, or seed the session file)
//! - A test backend project with a pending vehicle post seeded
//!
//! Run with: cargo test -p secondxe-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

async fn sign_in(client: &Client) {
    let email = std::env::var("TEST_ADMIN_EMAIL").expect("TEST_ADMIN_EMAIL not set");
    let password = std::env::var("TEST_ADMIN_PASSWORD").expect("TEST_ADMIN_PASSWORD not set");

    let resp = client
        .post(format!("{}/login", admin_base_url()))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to reach admin server");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running admin server and backend credentials"]
async fn test_post_list_has_projected_columns() {
    let client = Client::new();
    sign_in(&client).await;

    let resp = client
        .get(format!("{}/api/posts", admin_base_url()))
        .send()
        .await
        .expect("Failed to reach admin server");
    assert_eq!(resp.status(), StatusCode::OK);

    let posts: Vec<Value> = resp.json().await.expect("Post list was not JSON");
    if let Some(post) = posts.first() {
        for key in ["id", "title", "brand", "model", "price", "status"] {
            assert!(post.get(key).is_some(), "post row missing column {key}");
        }
    }
}

#[tokio::test]
#[ignore = "Requires running admin server and backend credentials"]
async fn test_pending_list_only_pending() {
    let client = Client::new();
    sign_in(&client).await;

    let resp = client
        .get(format!("{}/api/posts/pending", admin_base_url()))
        .send()
        .await
        .expect("Failed to reach admin server");
    assert_eq!(resp.status(), StatusCode::OK);

    let posts: Vec<Value> = resp.json().await.expect("Pending list was not JSON");
    for post in &posts {
        assert_eq!(post["status"], "pending");
    }
}

#[tokio::test]
#[ignore = "Requires running admin server and a seeded pending post"]
async fn test_approve_then_reject_round_trip() {
    let client = Client::new();
    sign_in(&client).await;

    let resp = client
        .get(format!("{}/api/posts/pending", admin_base_url()))
        .send()
        .await
        .expect("Failed to reach admin server");
    let posts: Vec<Value> = resp.json().await.expect("Pending list was not JSON");
    let id = posts
        .first()
        .and_then(|p| p["id"].as_i64())
        .expect("No pending post seeded");

    let resp = client
        .post(format!("{}/api/posts/{id}/approve", admin_base_url()))
        .send()
        .await
        .expect("Failed to reach admin server");
    assert_eq!(resp.status(), StatusCode::OK);
    let post: Value = resp.json().await.expect("Approve response was not JSON");
    assert_eq!(post["status"], "available");

    let resp = client
        .post(format!("{}/api/posts/{id}/reject", admin_base_url()))
        .send()
        .await
        .expect("Failed to reach admin server");
    assert_eq!(resp.status(), StatusCode::OK);
    let post: Value = resp.json().await.expect("Reject response was not JSON");
    assert_eq!(post["status"], "expired");
}

#[tokio::test]
#[ignore = "Requires running admin server and backend credentials"]
async fn test_dashboard_snapshot_shape() {
    let client = Client::new();
    sign_in(&client).await;

    let resp = client
        .get(format!("{}/api/dashboard", admin_base_url()))
        .send()
        .await
        .expect("Failed to reach admin server");
    assert_eq!(resp.status(), StatusCode::OK);

    let snapshot: Value = resp.json().await.expect("Snapshot was not JSON");
    assert!(snapshot["user_count"].is_u64());
    assert!(snapshot["post_count"].is_u64());
    assert_eq!(snapshot["chart"].as_array().map(Vec::len), Some(30));
}
