//! Per-entity view-state containers.
//!
//! Each entity type (accounts, posts, payments, reports) gets its own
//! [`EntityStore`]: the fetched collection, an optional single-record slot,
//! and a request status flag. The container is an explicit state machine
//!
//! ```text
//! Idle -> Loading -> Succeeded
//!                 -> Failed
//! ```
//!
//! re-entrant in both terminal states (any success or failure allows a new
//! `Loading` cycle). State is passed through [`crate::state::AppState`]
//! rather than living in ambient globals.
//!
//! # Staleness policy
//!
//! A failed fetch leaves the previously cached collection untouched
//! (stale-but-available). Mutations patch the cache in memory instead of
//! refetching, so the cache can drift from server truth when a remote write
//! has side effects beyond the echoed row; the next full fetch overwrites
//! the collection wholesale.

use serde::Serialize;

/// An entity with a stable identifier, replaceable and removable by id.
pub trait Keyed {
    /// Identifier type.
    type Id: Copy + PartialEq;

    /// The entity's identifier.
    fn key(&self) -> Self::Id;
}

/// Request lifecycle status for a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// View-state container for one entity type.
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    items: Vec<T>,
    selected: Option<T>,
    status: RequestStatus,
    error: Option<String>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            status: RequestStatus::Idle,
            error: None,
        }
    }
}

impl<T> EntityStore<T> {
    /// Create an empty store in the `Idle` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached collection from the last successful full fetch.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Single-record slot filled by fetch-by-id; never merged into `items`.
    #[must_use]
    pub const fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// Current request status.
    #[must_use]
    pub const fn status(&self) -> RequestStatus {
        self.status
    }

    /// Verbatim remote message from the last failure, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Enter the `Loading` state. Clears the error, keeps cached items.
    pub fn begin(&mut self) {
        self.status = RequestStatus::Loading;
        self.error = None;
    }

    /// Record a successful full fetch, replacing the collection wholesale.
    pub fn succeed_all(&mut self, items: Vec<T>) {
        self.items = items;
        self.status = RequestStatus::Succeeded;
        self.error = None;
    }

    /// Record a successful single-record fetch.
    pub fn succeed_one(&mut self, item: T) {
        self.selected = Some(item);
        self.status = RequestStatus::Succeeded;
        self.error = None;
    }

    /// Record a failure. The prior collection is left untouched.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = RequestStatus::Failed;
        self.error = Some(message.into());
    }
}

impl<T: Keyed> EntityStore<T> {
    /// Append a row echoed back by a successful create.
    pub fn apply_created(&mut self, item: T) {
        self.items.push(item);
        self.status = RequestStatus::Succeeded;
        self.error = None;
    }

    /// Replace the cached row with the same id, if present.
    pub fn apply_updated(&mut self, item: T) {
        if let Some(slot) = self.items.iter_mut().find(|i| i.key() == item.key()) {
            *slot = item;
        }
        self.status = RequestStatus::Succeeded;
        self.error = None;
    }

    /// Remove the cached row with the given id, if present.
    pub fn apply_removed(&mut self, id: T::Id) {
        self.items.retain(|i| i.key() != id);
        self.status = RequestStatus::Succeeded;
        self.error = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        name: &'static str,
    }

    impl Keyed for Row {
        type Id = i64;

        fn key(&self) -> i64 {
            self.id
        }
    }

    fn seeded() -> EntityStore<Row> {
        let mut store = EntityStore::new();
        store.begin();
        store.succeed_all(vec![Row { id: 1, name: "a" }, Row { id: 2, name: "b" }]);
        store
    }

    #[test]
    fn test_starts_idle_and_empty() {
        let store: EntityStore<Row> = EntityStore::new();
        assert_eq!(store.status(), RequestStatus::Idle);
        assert!(store.items().is_empty());
        assert!(store.error().is_none());
    }

    #[test]
    fn test_failed_fetch_keeps_prior_collection() {
        let mut store = seeded();
        store.begin();
        store.fail("service unavailable");

        assert_eq!(store.status(), RequestStatus::Failed);
        assert_eq!(store.error(), Some("service unavailable"));
        // stale-but-available
        assert_eq!(store.items().len(), 2);
    }

    #[test]
    fn test_failure_message_is_verbatim() {
        let mut store: EntityStore<Row> = EntityStore::new();
        store.begin();
        store.fail("JSON object requested, multiple (or no) rows returned");
        assert_eq!(
            store.error(),
            Some("JSON object requested, multiple (or no) rows returned")
        );
    }

    #[test]
    fn test_backend_failure_message_recorded_verbatim() {
        use crate::backend::BackendError;

        let mut store = seeded();
        store.begin();
        let err = BackendError::Unauthorized("Invalid login credentials".to_string());
        store.fail(err.message());
        assert_eq!(store.error(), Some("Invalid login credentials"));
    }

    #[test]
    fn test_reentrant_after_failure() {
        let mut store = seeded();
        store.begin();
        store.fail("boom");
        store.begin();
        assert_eq!(store.status(), RequestStatus::Loading);
        assert!(store.error().is_none());
        store.succeed_all(vec![Row { id: 3, name: "c" }]);
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_succeed_one_does_not_touch_collection() {
        let mut store = seeded();
        store.begin();
        store.succeed_one(Row { id: 9, name: "z" });
        assert_eq!(store.items().len(), 2);
        assert_eq!(store.selected().unwrap().id, 9);
    }

    #[test]
    fn test_apply_created_appends() {
        let mut store = seeded();
        store.apply_created(Row { id: 3, name: "c" });
        assert_eq!(store.items().len(), 3);
        assert_eq!(store.status(), RequestStatus::Succeeded);
    }

    #[test]
    fn test_apply_updated_replaces_by_id() {
        let mut store = seeded();
        store.apply_updated(Row { id: 2, name: "b2" });
        assert_eq!(store.items()[1], Row { id: 2, name: "b2" });
    }

    #[test]
    fn test_apply_updated_unknown_id_is_noop_on_items() {
        let mut store = seeded();
        store.apply_updated(Row { id: 99, name: "x" });
        assert_eq!(store.items().len(), 2);
    }

    #[test]
    fn test_apply_removed_by_id() {
        let mut store = seeded();
        store.apply_removed(1);
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].id, 2);
    }
}
