//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::JsonFileLinkRepository;

/// Link service over the JSON file store, as used by the HTTP layer.
pub type FileLinkService = LinkService<JsonFileLinkRepository>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<FileLinkService>,
    /// Prefix of issued short URLs, without a trailing slash.
    pub base_url: String,
}

impl AppState {
    pub fn new(link_service: Arc<FileLinkService>, base_url: impl Into<String>) -> Self {
        Self {
            link_service,
            base_url: base_url.into(),
        }
    }

    /// Builds the state for a link file at `db_file`.
    pub fn for_file(db_file: &str, base_url: impl Into<String>) -> Self {
        let repository = Arc::new(JsonFileLinkRepository::new(db_file));
        Self::new(Arc::new(LinkService::new(repository)), base_url)
    }
}
