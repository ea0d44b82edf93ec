//! Target URL validation and normalization.
//!
//! Normalization is intentionally shallow: surrounding whitespace is trimmed
//! and the scheme prefix is checked. Everything else, including case, is kept
//! byte-for-byte so that deduplication compares exactly what the user sent.

/// Schemes accepted as redirect targets.
const ALLOWED_PREFIXES: &[&str] = &["http://", "https://"];

/// Errors that can occur during URL normalization.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("parameter 'url' is required")]
    Missing,

    #[error("the URL must start with http:// or https://")]
    UnsupportedProtocol,

    #[error("the URL must not contain control characters")]
    ControlCharacters,
}

/// Normalizes a user-supplied target URL.
///
/// # Rules
///
/// 1. Leading and trailing whitespace is removed
/// 2. An empty result is rejected as missing
/// 3. The URL must start with `http://` or `https://` (case-sensitive)
/// 4. No control characters may remain, since the URL is later sent back
///    verbatim in a `Location` header
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Missing`] for empty input.
/// Returns [`UrlNormalizationError::UnsupportedProtocol`] for anything else
/// that lacks an accepted prefix, e.g. `ftp://x` or `example.com`.
/// Returns [`UrlNormalizationError::ControlCharacters`] for embedded newlines
/// and similar.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("  https://example.com/a ").unwrap(), "https://example.com/a");
/// assert!(normalize_url("example.com").is_err());
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Missing);
    }

    if !ALLOWED_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
        return Err(UrlNormalizationError::UnsupportedProtocol);
    }

    if trimmed.chars().any(char::is_control) {
        return Err(UrlNormalizationError::ControlCharacters);
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_simple_http() {
        assert_eq!(normalize_url("http://example.com").unwrap(), "http://example.com");
    }

    #[test]
    fn test_normalize_simple_https() {
        assert_eq!(
            normalize_url("https://example.com/a").unwrap(),
            "https://example.com/a"
        );
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(
            normalize_url("  https://example.com/a\n").unwrap(),
            "https://example.com/a"
        );
    }

    #[test]
    fn test_normalize_keeps_case_and_query() {
        let url = "https://Example.com/Path?text=Hello,%20World#frag";
        assert_eq!(normalize_url(url).unwrap(), url);
    }

    #[test]
    fn test_normalize_empty_is_missing() {
        assert_eq!(normalize_url(""), Err(UrlNormalizationError::Missing));
        assert_eq!(normalize_url("   "), Err(UrlNormalizationError::Missing));
    }

    #[test]
    fn test_reject_ftp() {
        assert_eq!(
            normalize_url("ftp://x"),
            Err(UrlNormalizationError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_reject_missing_scheme() {
        assert_eq!(
            normalize_url("example.com"),
            Err(UrlNormalizationError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_reject_uppercase_scheme() {
        assert!(normalize_url("HTTPS://example.com").is_err());
    }

    #[test]
    fn test_reject_javascript() {
        assert!(normalize_url("javascript:alert(1)").is_err());
    }

    #[test]
    fn test_reject_embedded_newline() {
        assert_eq!(
            normalize_url("https://example.com/a\r\nSet-Cookie: x=1"),
            Err(UrlNormalizationError::ControlCharacters)
        );
    }

    #[test]
    fn test_accepts_non_ascii_path() {
        assert!(normalize_url("https://example.com/café").is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            UrlNormalizationError::Missing.to_string(),
            "parameter 'url' is required"
        );
        assert!(
            UrlNormalizationError::UnsupportedProtocol
                .to_string()
                .contains("http:// or https://")
        );
    }
}
