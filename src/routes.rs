//! Top-level router configuration.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash trimming (`/list/` routes as `/list`)

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with state and tracing, without path normalization.
///
/// Path normalization has to wrap the router from the outside, so tests that
/// drive a plain [`Router`] use this directly.
pub fn router(state: AppState) -> Router {
    api::routes::routes()
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service served by [`crate::server::run`].
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
