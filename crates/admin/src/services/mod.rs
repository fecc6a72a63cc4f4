//! Entity services: the bridge between the hosted tables and view state.
//!
//! One service per entity type. Each wraps the shared [`DataClient`] and
//! that entity's [`EntityStore`] slot and exposes the operation set the
//! admin views need: `fetch_all`, `fetch_by_id`, `create`/`update`/`delete`
//! where the view supports it, plus domain transitions (post approval,
//! report resolution).
//!
//! Every operation is a single remote call. On success the store is patched
//! in memory (append / replace-by-id / remove-by-id) without a refetch; on
//! failure the store keeps its previous collection and records the remote
//! message verbatim. Nothing retries.
//!
//! [`DataClient`]: crate::backend::DataClient
//! [`EntityStore`]: crate::store::EntityStore

pub mod accounts;
pub mod auth;
pub mod dashboard;
pub mod payments;
pub mod posts;
pub mod reports;

pub use accounts::AccountService;
pub use auth::{AuthError, AuthService};
pub use dashboard::{DashboardService, DashboardSnapshot, DashboardState, ProfitPoint};
pub use payments::PaymentService;
pub use posts::PostService;
pub use reports::ReportService;
