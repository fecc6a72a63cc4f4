//! SecondXE Admin - internal administration panel for the vehicle resale
//! marketplace.
//!
//! This binary serves the admin panel on port 3001.
//!
//! # Architecture
//!
//! - Axum web framework
//! - Hosted backend service for all persistent data (REST data API +
//!   password auth endpoints)
//! - Local JSON session file mirroring the signed-in admin's markers
//!
//! The panel holds no database of its own. Every list, count, and mutation
//! goes through the hosted project's `User`, `VehiclePost`, `PostPayment`,
//! and `Report` tables; the hosted row-level policies are the trust
//! boundary.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use secondxe_admin::{
    backend::{AuthClient, DataClient},
    config::AdminConfig,
    routes,
    session::SessionStore,
    state::AppState,
};

use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &AdminConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: config.sentry_sample_rate,
            traces_sample_rate: config.sentry_traces_sample_rate,
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    // Honor a local .env file when present
    dotenvy::dotenv().ok();

    // Load configuration from environment (needed for Sentry init)
    let config = AdminConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Initialize tracing with EnvFilter and Sentry integration
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "secondxe_admin=info,tower_http=debug".into());

    // Use JSON format in hosted environments for structured log parsing
    let is_hosted = std::env::var("FLY_APP_NAME").is_ok();
    let json_layer = is_hosted.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!is_hosted).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    // Local session state: a JSON file when configured, in-memory otherwise
    let session = match &config.session_file {
        Some(path) => SessionStore::open(path).expect("Failed to open session file"),
        None => SessionStore::in_memory(),
    };

    // Clients for the hosted backend
    let data_client = DataClient::new(&config.backend);
    let auth_client = AuthClient::new(&config.backend);

    let addr = config.socket_addr();
    let state = AppState::new(data_client, auth_client, session);

    // Build router
    let app = routes::routes()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record("latency_ms", latency.as_millis() as u64);
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    tracing::info!("admin listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
