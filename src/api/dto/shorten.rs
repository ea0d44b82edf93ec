//! Query parameters for the shorten endpoint.

/// Query string of `GET /new`.
///
/// Built from the raw key/value pairs so that a repeated `url` parameter is
/// not an extractor rejection: the first non-blank value wins, later ones are
/// ignored. A missing parameter reaches the service as `None`.
#[derive(Debug, Default)]
pub struct ShortenQuery {
    pub url: Option<String>,
}

impl ShortenQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let url = pairs
            .into_iter()
            .find(|(key, value)| key == "url" && !value.is_empty())
            .map(|(_, value)| value);

        Self { url }
    }
}
