//! Vehicle post management over the hosted `VehiclePost` table.
//!
//! The list view fetches a projected column subset ([`PostSummary`]); the
//! detail view fetches full rows. Approval moves a pending post to
//! `available`, rejection to `expired`.

use tokio::sync::RwLock;
use tracing::instrument;

use secondxe_core::{PostId, PostStatus};

use crate::backend::{BackendError, DataClient, SelectQuery};
use crate::models::{Post, PostPatch, PostSummary};
use crate::store::EntityStore;

const TABLE: &str = "VehiclePost";

/// Service for the posts and approval views.
pub struct PostService<'a> {
    data: &'a DataClient,
    store: &'a RwLock<EntityStore<PostSummary>>,
}

impl<'a> PostService<'a> {
    /// Create a new post service.
    #[must_use]
    pub const fn new(data: &'a DataClient, store: &'a RwLock<EntityStore<PostSummary>>) -> Self {
        Self { data, store }
    }

    /// Fetch every post, projected to the list columns.
    ///
    /// # Errors
    ///
    /// Returns the backend error; the cached collection is left untouched.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> Result<Vec<PostSummary>, BackendError> {
        self.store.write().await.begin();

        let query = SelectQuery::new().columns(PostSummary::COLUMNS);
        match self.data.select::<PostSummary>(TABLE, query).await {
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

    /// Fetch the posts awaiting approval.
    ///
    /// Does not touch the cached list collection; the approval view holds
    /// its own snapshot.
    ///
    /// # Errors
    ///
    /// Returns the backend error unchanged.
    #[instrument(skip(self))]
    pub async fn fetch_pending(&self) -> Result<Vec<PostSummary>, BackendError> {
        let query = SelectQuery::new()
            .columns(PostSummary::COLUMNS)
            .eq("status", PostStatus::Pending);
        self.data.select(TABLE, query).await
    }

    /// Fetch one full post row.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] if the id does not exist.
    #[instrument(skip(self))]
    pub async fn fetch_by_id(&self, id: PostId) -> Result<Post, BackendError> {
        self.data
            .select_single(TABLE, SelectQuery::new().eq("id", id))
            .await
    }

    /// Update a post row and patch the cached list by id.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] if the id does not exist.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: PostId, patch: &PostPatch) -> Result<PostSummary, BackendError> {
        self.store.write().await.begin();

        match self
            .data
            .update_by_id::<PostSummary, _>(TABLE, id.as_i64(), patch)
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

    /// Approve a pending post (status to `available`).
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] if the id does not exist.
    #[instrument(skip(self))]
    pub async fn approve(&self, id: PostId) -> Result<PostSummary, BackendError> {
        self.update(id, &PostPatch::status(PostStatus::Available)).await
    }

    /// Reject a pending post (status to `expired`).
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] if the id does not exist.
    #[instrument(skip(self))]
    pub async fn reject(&self, id: PostId) -> Result<PostSummary, BackendError> {
        self.update(id, &PostPatch::status(PostStatus::Expired)).await
    }

    /// Delete a post row and drop it from the cached list.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] if the id does not exist.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: PostId) -> Result<PostSummary, BackendError> {
        self.store.write().await.begin();

        match self
            .data
            .delete_by_id::<PostSummary>(TABLE, id.as_i64())
            .await
        {
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
