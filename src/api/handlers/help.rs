//! Handler for the usage message.

use axum::extract::State;

use crate::state::AppState;

/// Returns the plain-text usage message.
///
/// # Endpoints
///
/// `GET /` and `GET /help`
pub async fn help_handler(State(state): State<AppState>) -> String {
    usage(&state.base_url)
}

/// Builds the usage message for a service reachable at `base_url`.
pub fn usage(base_url: &str) -> String {
    format!(
        "URL shortener is running!\n\
         Usage:\n  \
         /new?url=<URL>     -> create a short link\n  \
         /list              -> list all links\n  \
         /<code>            -> redirect\n\
         \n\
         Example:\n  \
         {base_url}/new?url=https://example.com/some/long/path\n"
    )
}
