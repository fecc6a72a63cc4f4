//! Report moderation over the hosted `Report` table.

use tokio::sync::RwLock;
use tracing::instrument;

use secondxe_core::{ReportId, ReportStatus};

use crate::backend::{BackendError, DataClient, SelectQuery};
use crate::models::{Report, ReportPatch};
use crate::store::EntityStore;

const TABLE: &str = "Report";

/// Service for the reports view.
pub struct ReportService<'a> {
    data: &'a DataClient,
    store: &'a RwLock<EntityStore<Report>>,
}

impl<'a> ReportService<'a> {
    /// Create a new report service.
    #[must_use]
    pub const fn new(data: &'a DataClient, store: &'a RwLock<EntityStore<Report>>) -> Self {
        Self { data, store }
    }

    /// Fetch every report, replacing the cached collection wholesale.
    ///
    /// # Errors
    ///
    /// Returns the backend error; the cached collection is left untouched.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> Result<Vec<Report>, BackendError> {
        self.store.write().await.begin();

        match self.data.select::<Report>(TABLE, SelectQuery::new()).await {
            Ok(rows) => {
                self.store.write().await.succeed_all(rows.clone());
                Ok(rows)
            }
            Err(e) => {
                self.store.write().await.fail(e.message());
                Err(e)
            }
        }
    }

    /// Fetch one report into the single-record slot.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] if the id does not exist.
    #[instrument(skip(self))]
    pub async fn fetch_by_id(&self, id: ReportId) -> Result<Report, BackendError> {
        self.store.write().await.begin();

        match self
            .data
            .select_single::<Report>(TABLE, SelectQuery::new().eq("id", id))
            .await
        {
            Ok(row) => {
                self.store.write().await.succeed_one(row.clone());
                Ok(row)
            }
            Err(e) => {
                self.store.write().await.fail(e.message());
                Err(e)
            }
        }
    }

    /// Update a report row and patch the cache by id.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] if the id does not exist.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: ReportId, patch: &ReportPatch) -> Result<Report, BackendError> {
        self.store.write().await.begin();

        match self
            .data
            .update_by_id::<Report, _>(TABLE, id.as_i64(), patch)
            .await
        {
            Ok(row) => {
                self.store.write().await.apply_updated(row.clone());
                Ok(row)
            }
            Err(e) => {
                self.store.write().await.fail(e.message());
                Err(e)
            }
        }
    }

    /// Mark a report resolved.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] if the id does not exist.
    #[instrument(skip(self))]
    pub async fn resolve(&self, id: ReportId) -> Result<Report, BackendError> {
        self.update(id, &ReportPatch::status(ReportStatus::Resolved)).await
    }

    /// Reject a report as unfounded.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] if the id does not exist.
    #[instrument(skip(self))]
    pub async fn reject(&self, id: ReportId) -> Result<Report, BackendError> {
        self.update(id, &ReportPatch::status(ReportStatus::Rejected)).await
    }

    /// Delete a report row and drop it from the cache.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] if the id does not exist.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ReportId) -> Result<Report, BackendError> {
        self.store.write().await.begin();

        match self.data.delete_by_id::<Report>(TABLE, id.as_i64()).await {
            Ok(row) => {
                self.store.write().await.apply_removed(id);
                Ok(row)
            }
            Err(e) => {
                self.store.write().await.fail(e.message());
                Err(e)
            }
        }
    }
}
