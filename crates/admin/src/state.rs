//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    backend::{AuthClient, DataClient},
    models::{Account, Payment, PostSummary, Report},
    services::{
        AccountService, AuthService, DashboardService, DashboardState, PaymentService,
        PostService, ReportService,
    },
    session::SessionStore,
    store::EntityStore,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    data_client: DataClient,
    auth_client: AuthClient,
    session: SessionStore,
    accounts: RwLock<EntityStore<Account>>,
    posts: RwLock<EntityStore<PostSummary>>,
    payments: RwLock<EntityStore<Payment>>,
    reports: RwLock<EntityStore<Report>>,
    dashboard: RwLock<DashboardState>,
}

impl AppState {
    pub fn new(data_client: DataClient, auth_client: AuthClient, session: SessionStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                data_client,
                auth_client,
                session,
                accounts: RwLock::new(EntityStore::new()),
                posts: RwLock::new(EntityStore::new()),
                payments: RwLock::new(EntityStore::new()),
                reports: RwLock::new(EntityStore::new()),
                dashboard: RwLock::new(DashboardState::default()),
            }),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    pub fn auth_service(&self) -> AuthService<'_> {
        AuthService::new(
            &self.inner.auth_client,
            &self.inner.data_client,
            &self.inner.session,
        )
    }

    pub fn account_service(&self) -> AccountService<'_> {
        AccountService::new(&self.inner.data_client, &self.inner.accounts)
    }

    pub fn post_service(&self) -> PostService<'_> {
        PostService::new(&self.inner.data_client, &self.inner.posts)
    }

    pub fn payment_service(&self) -> PaymentService<'_> {
        PaymentService::new(&self.inner.data_client, &self.inner.payments)
    }

    pub fn report_service(&self) -> ReportService<'_> {
        ReportService::new(&self.inner.data_client, &self.inner.reports)
    }

    pub fn dashboard_service(&self) -> DashboardService<'_> {
        DashboardService::new(&self.inner.data_client, &self.inner.dashboard)
    }
}
