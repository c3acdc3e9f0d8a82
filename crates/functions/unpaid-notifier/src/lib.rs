//! Unpaid Notifier Library
//!
//! HTTP-triggered job that raises a notification for every house that has
//! not paid the current month. Meant to be called once a day by an external
//! scheduler, or run directly with `run-once`.

pub mod clock;
pub mod config;
pub mod handlers;
pub mod job;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use common::{cancel_pair, cancellable};

use crate::clock::{FixedClock, MonthClock, SystemClock};
use crate::config::NotifierConfig;
use crate::routes::create_router;
use crate::state::AppState;
use crate::store::SeaNotificationStore;

pub use crate::job::run_unpaid_check;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: NotifierConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = syndic_store::connect(&config.store).await?;
    let store = Arc::new(SeaNotificationStore::new(db));

    // Create app state
    let state = AppState::new(store, Arc::new(SystemClock));

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = config.bind_address().parse()?;
    info!(service = %config.service.service_name, "Listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Run the check once, for the given month or the current one.
///
/// Ctrl-C cancels the run before its insert starts.
pub async fn run_once(
    config: &NotifierConfig,
    month: Option<domain::BillingMonth>,
) -> Result<u64, Box<dyn std::error::Error>> {
    let db = syndic_store::connect(&config.store).await?;
    let store = SeaNotificationStore::new(db);

    let clock: Box<dyn MonthClock> = match month {
        Some(month) => Box::new(FixedClock(month)),
        None => Box::new(SystemClock),
    };
    let month = clock.current_month();

    let (handle, registration) = cancel_pair();
    let watcher = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handle.abort();
        }
    });

    let result = cancellable(run_unpaid_check(&store, &month), registration).await;
    watcher.abort();

    let created = result?;
    info!(%month, created, "Run complete");
    Ok(created)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
