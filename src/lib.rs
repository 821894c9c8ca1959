pub mod api;
pub mod auth;
pub mod config;
pub mod events;
pub mod models;
pub mod monitor;
pub mod scheduler;
pub mod store;
pub mod triage;
pub mod web;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::ApiContext;
use crate::config::Config;
use crate::events::EventHub;
use crate::monitor::{Monitor, SimSettings};
use crate::scheduler::AlertScheduler;
use crate::store::WardStore;

/// Wire up state and background tasks, start the HTTP server, and run
/// until ctrl-c.
pub async fn run() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = Arc::new(Config::from_env());
    let store = Arc::new(WardStore::with_demo_patients(config.history_cap));
    let events = EventHub::new(256);
    let settings = Arc::new(SimSettings::default());

    let scheduler = Arc::new(AlertScheduler::new(store.clone(), events.clone(), &config));
    let monitor = Monitor::new(
        store.clone(),
        scheduler.clone(),
        events.clone(),
        settings.clone(),
        &config,
    );

    tokio::spawn(scheduler.run());
    tokio::spawn(monitor.run());

    let ctx = ApiContext::new(store, events, settings, config.clone());
    let mut server = api::server::start(ctx, config.bind).await?;
    tracing::info!(addr = %server.addr, "dashboard ready");

    tokio::signal::ctrl_c().await?;
    tracing::info!("ctrl-c received, shutting down");
    server.shutdown();
    Ok(())
}
