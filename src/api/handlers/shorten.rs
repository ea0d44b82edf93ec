//! Handler for link shortening endpoint.

use axum::extract::{Query, State};
use tracing::debug;

use crate::api::dto::shorten::ShortenQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Shortens the URL in the `url` query parameter.
///
/// # Endpoint
///
/// `GET /new?url=<URL>`
///
/// # Response
///
/// The full short URL as plain text, e.g. `http://0.0.0.0:8000/G9`.
/// Shortening a URL that is already known returns its existing code.
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing or lacks an `http://` or
/// `https://` prefix. When `url` is repeated, the first value is used.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String, AppError> {
    let query = ShortenQuery::from_pairs(pairs);
    let shortened = state.link_service.shorten(query.url.as_deref()).await?;
    let link = shortened.link();

    debug!(
        code = %link.code,
        created = shortened.is_created(),
        "Shorten request served"
    );

    Ok(state.link_service.short_url(&state.base_url, &link.code))
}
