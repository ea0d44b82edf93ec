//! Handler for the link listing.

use axum::extract::State;

use crate::error::AppError;
use crate::state::AppState;

/// Body returned when the store holds no links.
pub const EMPTY_LISTING: &str = "No links yet.";

/// Lists every link with its hit count.
///
/// # Endpoint
///
/// `GET /list`
///
/// # Response
///
/// One `"<code> -> <url> (hits: <n>)"` line per link, in issue order, or
/// [`EMPTY_LISTING`] when there are none.
pub async fn list_handler(State(state): State<AppState>) -> Result<String, AppError> {
    let links = state.link_service.list_all().await?;

    if links.is_empty() {
        return Ok(EMPTY_LISTING.to_string());
    }

    Ok(links
        .iter()
        .map(|link| link.listing_line())
        .collect::<Vec<_>>()
        .join("\n"))
}
