//! Vehicle post (hosted table `VehiclePost`).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use secondxe_core::{AccountId, PostId, PostStatus};

use crate::store::Keyed;

/// A full vehicle post row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    /// Owning account.
    pub user_id: AccountId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub mileage: i64,
    pub price: Decimal,
    /// Ordered image references. Column keeps the legacy `imageURL` name.
    #[serde(rename = "imageURL", default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub expire_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Keyed for Post {
    type Id = PostId;

    fn key(&self) -> PostId {
        self.id
    }
}

/// The projected column subset the post list view fetches.
///
/// Kept separate from [`Post`] so the list endpoint can ask the service for
/// fewer columns without making every full-row field optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: PostId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub mileage: i64,
    pub price: Decimal,
    #[serde(rename = "imageURL", default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub expire_at: Option<DateTime<Utc>>,
}

impl PostSummary {
    /// Column list matching this projection.
    pub const COLUMNS: &'static str =
        "id, title, description, brand, model, year, mileage, price, imageURL, location, expire_at, status";
}

impl Keyed for PostSummary {
    type Id = PostId;

    fn key(&self) -> PostId {
        self.id
    }
}

/// Partial update for a post row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<DateTime<Utc>>,
}

impl PostPatch {
    /// Patch that only moves a post to a new status.
    #[must_use]
    pub fn status(status: PostStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_columns_match_projection() {
        // Every column named in COLUMNS must deserialize into PostSummary
        let row = serde_json::json!({
            "id": 12,
            "title": "2019 Toyota Vios",
            "description": "One owner",
            "brand": "Toyota",
            "model": "Vios",
            "year": 2019,
            "mileage": 42000,
            "price": 310_000_000i64,
            "imageURL": ["https://cdn.secondxe.example/p/12/0.jpg"],
            "location": "Da Nang",
            "expire_at": "2026-09-15T00:00:00Z",
            "status": "pending"
        });
        let summary: PostSummary = serde_json::from_value(row).unwrap();
        assert_eq!(summary.status, PostStatus::Pending);
        assert_eq!(summary.image_urls.len(), 1);
    }

    #[test]
    fn test_patch_deserializes_from_request_body() {
        let body = serde_json::json!({"price": 290_000_000i64, "location": "Hue"});
        let patch: PostPatch = serde_json::from_value(body).unwrap();
        assert_eq!(patch.location.as_deref(), Some("Hue"));
        assert!(patch.status.is_none());
    }

    #[test]
    fn test_status_patch_serializes_only_status() {
        let json = serde_json::to_value(PostPatch::status(PostStatus::Available)).unwrap();
        assert_eq!(json, serde_json::json!({"status": "available"}));
    }
}
