//! HTTP server initialization and runtime setup.
//!
//! Builds the link store and router from [`Config`] and drives the Axum
//! server until Ctrl+C.

use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address cannot be parsed or bound
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = AppState::for_file(&config.db_file, config.base_url.clone());
    tracing::info!("Link store at {}", config.db_file);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr()
        .parse()
        .with_context(|| format!("invalid listen address '{}'", config.listen_addr()))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server running at http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::warn!("Failed to listen for Ctrl+C: {}", e),
    }
}
