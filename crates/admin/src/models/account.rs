//! Marketplace account (hosted table `User`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use secondxe_core::{AccountId, AccountRole};

use crate::store::Keyed;

/// A marketplace account row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    /// Auth-service user id this profile belongs to.
    pub auth_id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: AccountRole,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Keyed for Account {
    type Id = AccountId;

    fn key(&self) -> AccountId {
        self.id
    }
}

/// Input for creating an account row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    pub auth_id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: AccountRole,
}

/// Partial update for an account row.
///
/// Only provided fields are sent; the service leaves the rest untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<AccountRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_skips_unset_fields() {
        let patch = AccountPatch {
            name: Some("New Name".to_string()),
            ..AccountPatch::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"name": "New Name"}));
    }

    #[test]
    fn test_patch_deserializes_from_request_body() {
        let body = serde_json::json!({"role": "user", "is_verified": false});
        let patch: AccountPatch = serde_json::from_value(body).unwrap();
        assert_eq!(patch.role, Some(AccountRole::User));
        assert_eq!(patch.is_verified, Some(false));
        assert!(patch.name.is_none());
    }

    #[test]
    fn test_account_deserializes_from_row() {
        let row = serde_json::json!({
            "id": 3,
            "auth_id": "7f9c24e5-2e7a-4b3f-9e6d-8a1b2c3d4e5f",
            "name": "Alice",
            "email": "alice@secondxe.example",
            "role": "admin",
            "is_verified": true,
            "created_at": "2026-08-01T10:00:00Z"
        });
        let account: Account = serde_json::from_value(row).unwrap();
        assert_eq!(account.id, AccountId::new(3));
        assert!(account.role.is_admin());
        assert!(account.phone.is_none());
    }
}
