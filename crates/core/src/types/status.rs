//! Role and status enums for marketplace entities.
//!
//! All variants serialize to the lowercase strings stored in the hosted
//! tables (`"admin"`, `"available"`, `"paid"`, ...).

use serde::{Deserialize, Serialize};

/// Account role.
///
/// The admin panel only admits accounts with the [`AccountRole::Admin`] role;
/// everyone else is redirected to the login page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    /// Marketplace administrator with access to this panel.
    Admin,
    /// Regular marketplace user.
    #[default]
    User,
}

impl AccountRole {
    /// Whether this role grants access to the admin panel.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Vehicle post lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    /// Approved and publicly listed.
    Available,
    /// Awaiting admin approval.
    #[default]
    Pending,
    /// Vehicle has been sold.
    Sold,
    /// Listing expired or was rejected.
    Expired,
}

/// Payment status for a post listing payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    #[default]
    Pending,
    Failed,
}

/// Report resolution status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    Pending,
    Resolved,
    Rejected,
}

macro_rules! impl_status_str {
    ($ty:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $s)),+
                }
            }
        }

        impl std::str::FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(format!(concat!("invalid ", stringify!($ty), ": {}"), s)),
                }
            }
        }
    };
}

impl_status_str!(AccountRole {
    Admin => "admin",
    User => "user",
});

impl_status_str!(PostStatus {
    Available => "available",
    Pending => "pending",
    Sold => "sold",
    Expired => "expired",
});

impl_status_str!(PaymentStatus {
    Paid => "paid",
    Pending => "pending",
    Failed => "failed",
});

impl_status_str!(ReportStatus {
    Pending => "pending",
    Resolved => "resolved",
    Rejected => "rejected",
});

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&AccountRole::Admin).unwrap(), "\"admin\"");
        let role: AccountRole = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, AccountRole::User);
    }

    #[test]
    fn test_role_is_admin() {
        assert!(AccountRole::Admin.is_admin());
        assert!(!AccountRole::User.is_admin());
    }

    #[test]
    fn test_post_status_roundtrip() {
        for s in ["available", "pending", "sold", "expired"] {
            let status = PostStatus::from_str(s).unwrap();
            assert_eq!(status.to_string(), s);
        }
        assert!(PostStatus::from_str("bogus").is_err());
    }

    #[test]
    fn test_payment_status_serde() {
        let status: PaymentStatus = serde_json::from_str("\"paid\"").unwrap();
        assert_eq!(status, PaymentStatus::Paid);
        assert_eq!(serde_json::to_string(&PaymentStatus::Failed).unwrap(), "\"failed\"");
    }

    #[test]
    fn test_report_status_default() {
        assert_eq!(ReportStatus::default(), ReportStatus::Pending);
    }
}
