//! Listing payment (hosted table `PostPayment`).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use secondxe_core::{AccountId, PaymentId, PaymentStatus, PostId};

use crate::store::Keyed;

/// A payment row for promoting a vehicle post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub post_id: PostId,
    pub user_id: AccountId,
    /// Number of days the post stays promoted.
    pub display_duration: i32,
    pub total_price: Decimal,
    #[serde(default)]
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Keyed for Payment {
    type Id = PaymentId;

    fn key(&self) -> PaymentId {
        self.id
    }
}

/// Input for creating a payment row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPayment {
    pub post_id: PostId,
    pub user_id: AccountId,
    pub display_duration: i32,
    pub total_price: Decimal,
    pub status: PaymentStatus,
}

/// Partial update for a payment row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_duration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_deserializes_numeric_price() {
        let row = serde_json::json!({
            "id": 8,
            "post_id": 12,
            "user_id": 3,
            "display_duration": 30,
            "total_price": 150_000.5,
            "status": "paid",
            "created_at": "2026-08-20T08:30:00Z"
        });
        let payment: Payment = serde_json::from_value(row).unwrap();
        assert_eq!(payment.status, PaymentStatus::Paid);
        assert_eq!(payment.total_price.to_string(), "150000.5");
    }

    #[test]
    fn test_new_payment_deserializes_from_request_body() {
        let body = serde_json::json!({
            "post_id": 12,
            "user_id": 3,
            "display_duration": 7,
            "total_price": 50_000,
            "status": "pending"
        });
        let new_payment: NewPayment = serde_json::from_value(body).unwrap();
        assert_eq!(new_payment.display_duration, 7);
        assert_eq!(new_payment.status, PaymentStatus::Pending);
    }

    #[test]
    fn test_patch_deserializes_from_request_body() {
        let body = serde_json::json!({"status": "failed"});
        let patch: PaymentPatch = serde_json::from_value(body).unwrap();
        assert_eq!(patch.status, Some(PaymentStatus::Failed));
        assert!(patch.total_price.is_none());
    }
}
