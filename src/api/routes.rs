//! Route configuration for the public HTTP surface.

use crate::api::handlers::{
    fallback_handler, help_handler, list_handler, redirect_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All routes. Every endpoint is `GET`; other methods get 405.
///
/// # Endpoints
///
/// - `GET /`              - Usage message
/// - `GET /help`          - Usage message
/// - `GET /new?url=<URL>` - Shorten a URL
/// - `GET /list`          - List every link with its hits
/// - `GET /{code}`        - Redirect to the original URL
///
/// Static segments take precedence over `/{code}`, which is why the
/// generator never issues `new`, `list` or `help` as codes. Any other path,
/// e.g. `/a/b`, is looked up as a code by the fallback.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(help_handler))
        .route("/help", get(help_handler))
        .route("/new", get(shorten_handler))
        .route("/list", get(list_handler))
        .route("/{code}", get(redirect_handler))
        .fallback(fallback_handler)
}
