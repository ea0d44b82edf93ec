//! File-backed repository implementations.
//!
//! - [`JsonFileLinkRepository`] - Link table stored in a single JSON file

pub mod json_link_repository;

pub use json_link_repository::{JsonFileLinkRepository, LinkTable, StoredLink};
