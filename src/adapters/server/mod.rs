//! HTTP Server Adapter
//!
//! Exposes the backend routes via axum 0.7 and owns server lifecycle
//! (bind, serve, graceful shutdown on the broadcast channel).
//!
//! Sub-modules:
//! - `routes`: router construction and request handlers

pub mod routes;

pub use routes::{AppState, router};

use std::net::SocketAddr;

use tokio::sync::broadcast;
use tracing::info;

/// Axum-based HTTP server for the backend routes.
pub struct ApiServer {
    /// Shared handler state (the odds feed port).
    state: AppState,
    /// Bind port (`PORT` env, default 3000).
    port: u16,
}

impl ApiServer {
    /// Create a new API server.
    pub fn new(state: AppState, port: u16) -> Self {
        Self { state, port }
    }

    /// Bind and serve until the shutdown channel fires.
    pub async fn run(self, mut shutdown_rx: broadcast::Receiver<()>) -> anyhow::Result<()> {
        let app = router(self.state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!(address = %addr, "Backend listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
            })
            .await?;

        Ok(())
    }
}
