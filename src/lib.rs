//! # linkfile
//!
//! A small URL shortener: long URLs get counter-based base62 codes, visitors
//! of `/<code>` are redirected with 301, and every redirect counts one hit.
//! The whole link table lives in a single JSON file.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link entity and repository trait
//! - **Application Layer** ([`application`]) - URL validation and lookup rules
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON file store
//! - **API Layer** ([`api`]) - Plain-text HTTP handlers and tracing middleware
//!
//! ## Quick Start
//!
//! ```bash
//! PORT=8000 DB_FILE=db.json cargo run
//! curl 'http://localhost:8000/new?url=https://example.com/a'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for the admin CLI
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, Shortened, StoreStats};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::JsonFileLinkRepository;
    pub use crate::state::AppState;
}
