//! Herodex HTTP service.
//!
//! Usage:
//!   herodex --port 8000 --database herodex.db
//!
//! The upstream is chosen from `SUPERHERO_API_SOURCE` (a dataset ending in
//! `/all.json`) or `SUPERHERO_API_TOKEN` (the search API). With neither set
//! every lookup reports "not found".

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use herodex_db::HeroStore;
use herodex_server::{build_router, AppState, ServerConfig};
use herodex_upstream::{UpstreamClient, UpstreamMode};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    let default_level = if config.verbose { "debug" } else { "info" };
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .compact()
        .init();

    info!("Herodex starting...");

    let store = HeroStore::open(&config.database)
        .with_context(|| format!("Failed to open database {:?}", config.database))?;
    info!("Using database {:?}", config.database);

    let upstream = UpstreamClient::new(&config.upstream()).context("Failed to build HTTP client")?;
    if *upstream.mode() == UpstreamMode::Disabled {
        warn!("No upstream configured; every lookup will report not found");
    } else {
        info!("Upstream mode: {}", upstream.mode().label());
    }

    let app = build_router(AppState::new(Arc::new(store), Arc::new(upstream)));

    let addr = config.listen_addr().context("Invalid listen address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("HTTP API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Herodex stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
}
