//! BetItUp Backend — Entry Point
//!
//! Initializes configuration, logging, the upstream odds client, and the
//! HTTP server. Runs until SIGINT.
//!
//! Wiring sequence:
//! 1. Load config from the environment (PORT, ODDS_API_KEY, ...)
//! 2. Init tracing (JSON structured logging)
//! 3. Create OddsApiClient (reqwest, timeout-bounded, no retry)
//! 4. Serve the router on :PORT
//! 5. Wait for SIGINT → graceful shutdown

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tokio::sync::broadcast;
use tracing::info;

use betitup_backend::adapters::api::{OddsApiClient, OddsApiConfig};
use betitup_backend::adapters::server::{ApiServer, AppState};
use betitup_backend::config;

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load configuration from the environment ──────────
    let config = config::load_config().context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        port = config.server.port,
        "Starting BetItUp backend"
    );

    // ── 3. Create the upstream odds client ──────────────────
    let client = OddsApiClient::new(OddsApiConfig {
        base_url: config.api.base_url.clone(),
        api_key: config.api.api_key.clone(),
        timeout: config.api.timeout(),
    })
    .context("Failed to create odds API client")?;

    let state = AppState {
        feed: Arc::new(client),
    };

    // ── 4. Spawn the HTTP server ────────────────────────────
    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
    let server = ApiServer::new(state, config.server.port);
    let server_handle = tokio::spawn(server.run(shutdown_rx));

    // ── 5. Wait for SIGINT ──────────────────────────────────
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("SIGINT received, initiating graceful shutdown");
        }
    }

    let _ = shutdown_tx.send(());

    // In-flight requests get a grace window before the process exits.
    let _ = tokio::time::timeout(std::time::Duration::from_secs(10), server_handle).await;

    info!("Shutdown complete");
    Ok(())
}
