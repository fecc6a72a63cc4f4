//! Payment management over the hosted `PostPayment` table.

use tokio::sync::RwLock;
use tracing::instrument;

use secondxe_core::PaymentId;

use crate::backend::{BackendError, DataClient, SelectQuery};
use crate::models::{NewPayment, Payment, PaymentPatch};
use crate::store::EntityStore;

const TABLE: &str = "PostPayment";

/// Service for the payments view.
pub struct PaymentService<'a> {
    data: &'a DataClient,
    store: &'a RwLock<EntityStore<Payment>>,
}

impl<'a> PaymentService<'a> {
    /// Create a new payment service.
    #[must_use]
    pub const fn new(data: &'a DataClient, store: &'a RwLock<EntityStore<Payment>>) -> Self {
        Self { data, store }
    }

    /// Fetch every payment, replacing the cached collection wholesale.
    ///
    /// # Errors
    ///
    /// Returns the backend error; the cached collection is left untouched.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> Result<Vec<Payment>, BackendError> {
        self.store.write().await.begin();

        match self.data.select::<Payment>(TABLE, SelectQuery::new()).await {
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

    /// Fetch one payment into the single-record slot.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] if the id does not exist.
    #[instrument(skip(self))]
    pub async fn fetch_by_id(&self, id: PaymentId) -> Result<Payment, BackendError> {
        self.store.write().await.begin();

        match self
            .data
            .select_single::<Payment>(TABLE, SelectQuery::new().eq("id", id))
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

    /// Create a payment row and append the echoed row to the cache.
    ///
    /// # Errors
    ///
    /// Returns the backend error; the cached collection is unchanged and the
    /// verbatim message is recorded on the store.
    #[instrument(skip(self, new_payment))]
    pub async fn create(&self, new_payment: &NewPayment) -> Result<Payment, BackendError> {
        self.store.write().await.begin();

        match self.data.insert::<Payment, _>(TABLE, new_payment).await {
            Ok(row) => {
                self.store.write().await.apply_created(row.clone());
                Ok(row)
            }
            Err(e) => {
                self.store.write().await.fail(e.message());
                Err(e)
            }
        }
    }

    /// Update a payment row and patch the cache by id.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] if the id does not exist.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: PaymentId, patch: &PaymentPatch) -> Result<Payment, BackendError> {
        self.store.write().await.begin();

        match self
            .data
            .update_by_id::<Payment, _>(TABLE, id.as_i64(), patch)
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

    /// Delete a payment row and drop it from the cache.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] if the id does not exist.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: PaymentId) -> Result<Payment, BackendError> {
        self.store.write().await.begin();

        match self.data.delete_by_id::<Payment>(TABLE, id.as_i64()).await {
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
