//! Core domain entities.
//!
//! - [`Link`] - A shortened URL with its hit counter
//! - [`Shortened`] - Whether a shorten request created or reused an entry
//! - [`StoreStats`] - Table-wide counters

pub mod link;

pub use link::{Link, Shortened, StoreStats};
