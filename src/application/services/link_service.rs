//! Link creation, resolution and listing service.

use std::sync::Arc;

use crate::domain::entities::{Link, Shortened, StoreStats};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::url_normalizer::{UrlNormalizationError, normalize_url};

/// Service for creating and resolving shortened links.
///
/// Validates input before it reaches the repository and turns missing
/// entries into [`AppError::NotFound`].
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Shortens `raw_url`, reusing the existing code if the URL is known.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the URL is missing, empty, or does
    /// not start with `http://` or `https://`.
    /// Returns [`AppError::Storage`] if the store fails.
    pub async fn shorten(&self, raw_url: Option<&str>) -> Result<Shortened, AppError> {
        let raw_url = raw_url.ok_or(UrlNormalizationError::Missing)?;
        let url = normalize_url(raw_url)?;

        self.link_repository.create_or_reuse(&url).await
    }

    /// Retrieves a link by its short code without counting a hit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn lookup(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound(code.to_string()))
    }

    /// Resolves a code for a redirect, counting one hit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code; no hit
    /// counter changes in that case.
    pub async fn follow(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .record_hit(code)
            .await?
            .ok_or_else(|| AppError::NotFound(code.to_string()))
    }

    /// Returns every link in issue order.
    pub async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Returns table-wide counters.
    pub async fn stats(&self) -> Result<StoreStats, AppError> {
        let counter = self.link_repository.counter().await?;
        let links = self.link_repository.list().await?;

        Ok(StoreStats {
            counter,
            links: links.len(),
            total_hits: links.iter().map(|l| l.hits).sum(),
        })
    }

    /// Constructs the full short URL from a base URL and code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}
