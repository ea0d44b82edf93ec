//! Handlers for short URL redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the code and check that its URL fits in a `Location` header
/// 2. Increment its hit counter in one store operation
/// 3. Return 301 Moved Permanently with the original URL in `Location`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist, and 500 if the
/// stored URL cannot be used as a header value. No hit counter changes in
/// either case.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    redirect(&state, &code).await
}

/// Handles every path no route matches.
///
/// The whole path after the leading `/` is treated as a code, so `/a/b`
/// is looked up as `a/b`. Unknown paths, and any method other than `GET`,
/// end in the plain-text 404.
pub async fn fallback_handler(
    method: Method,
    uri: Uri,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let code = uri.path().strip_prefix('/').unwrap_or(uri.path());

    if method != Method::GET && method != Method::HEAD {
        return Err(AppError::NotFound(code.to_string()));
    }

    redirect(&state, code).await
}

async fn redirect(state: &AppState, code: &str) -> Result<Response, AppError> {
    // Codes are never reassigned, so the URL checked here is the one `follow` returns.
    let link = state.link_service.lookup(code).await?;
    let location = HeaderValue::from_bytes(link.url.as_bytes())
        .map_err(|_| AppError::BadTarget(code.to_string()))?;

    let link = state.link_service.follow(code).await?;

    debug!("Redirecting {} to {} (hits: {})", code, link.url, link.hits);

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
