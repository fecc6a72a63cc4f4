//! User report against a post (hosted table `Report`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use secondxe_core::{AccountId, PostId, ReportId, ReportStatus};

use crate::store::Keyed;

/// A report row filed by an account against a vehicle post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    /// Reporting account.
    pub user_id: AccountId,
    /// Reported post.
    pub post_id: PostId,
    pub reason: String,
    #[serde(default)]
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
}

impl Keyed for Report {
    type Id = ReportId;

    fn key(&self) -> ReportId {
        self.id
    }
}

/// Partial update for a report row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReportStatus>,
}

impl ReportPatch {
    /// Patch that only moves a report to a new status.
    #[must_use]
    pub fn status(status: ReportStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
