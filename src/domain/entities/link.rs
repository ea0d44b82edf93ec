//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its hit counter.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub code: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub hits: u64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(code: String, url: String, created_at: DateTime<Utc>, hits: u64) -> Self {
        Self {
            code,
            url,
            created_at,
            hits,
        }
    }

    /// Renders the entry as one line of the `/list` listing.
    pub fn listing_line(&self) -> String {
        format!("{} -> {} (hits: {})", self.code, self.url, self.hits)
    }
}

/// Outcome of a shorten request.
#[derive(Debug, Clone, PartialEq)]
pub enum Shortened {
    /// A new code was issued for the URL.
    Created(Link),
    /// The URL was already shortened; the existing entry is returned unchanged.
    Existing(Link),
}

impl Shortened {
    pub fn link(&self) -> &Link {
        match self {
            Shortened::Created(link) | Shortened::Existing(link) => link,
        }
    }

    pub fn into_link(self) -> Link {
        match self {
            Shortened::Created(link) | Shortened::Existing(link) => link,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Shortened::Created(_))
    }
}

/// Aggregate numbers over the whole table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub counter: u64,
    pub links: usize,
    pub total_hits: u64,
}
