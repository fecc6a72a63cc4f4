//! Account management over the hosted `User` table.

use tokio::sync::RwLock;
use tracing::instrument;

use secondxe_core::AccountId;

use crate::backend::{BackendError, DataClient, SelectQuery};
use crate::models::{Account, AccountPatch, NewAccount};
use crate::store::EntityStore;

const TABLE: &str = "User";

/// Service for the accounts view.
pub struct AccountService<'a> {
    data: &'a DataClient,
    store: &'a RwLock<EntityStore<Account>>,
}

impl<'a> AccountService<'a> {
    /// Create a new account service.
    #[must_use]
    pub const fn new(data: &'a DataClient, store: &'a RwLock<EntityStore<Account>>) -> Self {
        Self { data, store }
    }

    /// Fetch every account, replacing the cached collection wholesale.
    ///
    /// # Errors
    ///
    /// Returns the backend error; the previously cached collection is left
    /// untouched and the verbatim message is recorded on the store.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> Result<Vec<Account>, BackendError> {
        self.store.write().await.begin();

        match self.data.select::<Account>(TABLE, SelectQuery::new()).await {
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

    /// Fetch one account into the single-record slot.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] if the id does not exist.
    #[instrument(skip(self))]
    pub async fn fetch_by_id(&self, id: AccountId) -> Result<Account, BackendError> {
        self.store.write().await.begin();

        match self
            .data
            .select_single::<Account>(TABLE, SelectQuery::new().eq("id", id))
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

    /// Create an account row and append the echoed row to the cache.
    ///
    /// # Errors
    ///
    /// Returns the backend error; the cached collection is unchanged.
    #[instrument(skip(self, new_account))]
    pub async fn create(&self, new_account: &NewAccount) -> Result<Account, BackendError> {
        self.store.write().await.begin();

        match self.data.insert::<Account, _>(TABLE, new_account).await {
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

    /// Update an account row and patch the cache by id.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] if the id does not exist.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: AccountId, patch: &AccountPatch) -> Result<Account, BackendError> {
        self.store.write().await.begin();

        match self
            .data
            .update_by_id::<Account, _>(TABLE, id.as_i64(), patch)
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

    /// Delete an account row and drop it from the cache.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] if the id does not exist.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: AccountId) -> Result<Account, BackendError> {
        self.store.write().await.begin();

        match self.data.delete_by_id::<Account>(TABLE, id.as_i64()).await {
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
