//! Repository trait for short link data access.

use crate::domain::entities::{Link, Shortened};
use crate::error::AppError;
use async_trait::async_trait;

/// First counter value of an empty store.
///
/// The first issued code is the encoding of `COUNTER_START + 1`, which keeps
/// early codes at two characters or more.
pub const COUNTER_START: u64 = 1000;

/// Repository interface for the link table.
///
/// Every method is one atomic read-modify-persist cycle: implementations must
/// serialize them against each other and must never hand out the raw table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonFileLinkRepository`] - single JSON file
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Returns the entry for `url`, creating one if none exists.
    ///
    /// `url` must already be normalized. Reusing an entry neither advances the
    /// counter nor rewrites the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the store cannot be read or written.
    async fn create_or_reuse(&self, url: &str) -> Result<Shortened, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the store cannot be read.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Increments the hit counter of `code` and returns the updated entry.
    ///
    /// Lookup and increment happen under the same lock acquisition. Returns
    /// `Ok(None)` without touching the store when the code is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the store cannot be read or written.
    async fn record_hit(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Returns a snapshot of every entry in issue order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the store cannot be read.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Returns the current counter value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the store cannot be read.
    async fn counter(&self) -> Result<u64, AppError>;
}
