//! JSON file implementation of the link repository.
//!
//! The whole table lives in one file:
//!
//! ```json
//! {
//!   "counter": 1001,
//!   "urls": {
//!     "G9": { "url": "https://example.com/a", "created_at": 1700000000.5, "hits": 0 }
//!   }
//! }
//! ```
//!
//! The file is read at the start of every operation and rewritten in full
//! after every mutation, so several processes (the server and the admin CLI)
//! observe each other's writes without any cache to invalidate.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

use crate::domain::entities::{Link, Shortened};
use crate::domain::repositories::{COUNTER_START, LinkRepository};
use crate::error::{AppError, StorageError};
use crate::utils::code_generator::next_code;

/// One persisted entry, keyed by its code in [`LinkTable::urls`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredLink {
    pub url: String,
    /// Seconds since the Unix epoch, with sub-second precision.
    pub created_at: f64,
    pub hits: u64,
}

impl StoredLink {
    fn to_link(&self, code: &str) -> Link {
        Link::new(
            code.to_string(),
            self.url.clone(),
            from_epoch_seconds(self.created_at),
            self.hits,
        )
    }
}

/// On-disk layout of the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkTable {
    pub counter: u64,
    pub urls: BTreeMap<String, StoredLink>,
}

impl Default for LinkTable {
    fn default() -> Self {
        Self {
            counter: COUNTER_START,
            urls: BTreeMap::new(),
        }
    }
}

/// Link repository backed by a single JSON file and one process-wide lock.
pub struct JsonFileLinkRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileLinkRepository {
    /// Creates a repository for the file at `path`.
    ///
    /// The file is not touched until the first operation; a missing file reads
    /// as an empty table.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn guard(&self) -> Result<MutexGuard<'_, ()>, StorageError> {
        self.lock.lock().map_err(|_| StorageError::Poisoned)
    }

    fn load(&self) -> Result<LinkTable, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Link file {} not found, using empty table", self.path.display());
                Ok(LinkTable::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, table: &LinkTable) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(table)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Runs one locked load-modify-persist cycle.
    ///
    /// `op` returns its result and whether it modified the table; the file is
    /// only rewritten in the latter case.
    fn transact<T>(
        &self,
        op: impl FnOnce(&mut LinkTable) -> (T, bool),
    ) -> Result<T, StorageError> {
        let _guard = self.guard()?;
        let mut table = self.load()?;

        let (result, dirty) = op(&mut table);
        if dirty {
            self.save(&table)?;
        }

        Ok(result)
    }

    fn read<T>(&self, op: impl FnOnce(&LinkTable) -> T) -> Result<T, StorageError> {
        self.transact(|table| (op(table), false))
    }
}

#[async_trait]
impl LinkRepository for JsonFileLinkRepository {
    async fn create_or_reuse(&self, url: &str) -> Result<Shortened, AppError> {
        let shortened = self.transact(|table| {
            if let Some((code, entry)) = table.urls.iter().find(|(_, e)| e.url == url) {
                return (Shortened::Existing(entry.to_link(code)), false);
            }

            // Hand-edited files may already hold the next code; never reassign it.
            let (mut counter, mut code) = next_code(table.counter);
            while table.urls.contains_key(&code) {
                (counter, code) = next_code(counter);
            }

            let entry = StoredLink {
                url: url.to_string(),
                created_at: to_epoch_seconds(Utc::now()),
                hits: 0,
            };
            let link = entry.to_link(&code);

            table.counter = counter;
            table.urls.insert(code, entry);

            (Shortened::Created(link), true)
        })?;

        match &shortened {
            Shortened::Created(link) => info!("Issued code {} for {}", link.code, link.url),
            Shortened::Existing(link) => debug!("Reusing code {} for {}", link.code, link.url),
        }

        Ok(shortened)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.read(|table| table.urls.get(code).map(|e| e.to_link(code)))?)
    }

    async fn record_hit(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.transact(|table| match table.urls.get_mut(code) {
            Some(entry) => {
                entry.hits += 1;
                (Some(entry.to_link(code)), true)
            }
            None => (None, false),
        })?)
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let mut links = self.read(|table| {
            table
                .urls
                .iter()
                .map(|(code, entry)| entry.to_link(code))
                .collect::<Vec<_>>()
        })?;

        // Shorter codes were issued first; equal-length codes sort numerically.
        links.sort_by(|a, b| {
            a.code
                .len()
                .cmp(&b.code.len())
                .then_with(|| a.code.cmp(&b.code))
        });

        Ok(links)
    }

    async fn counter(&self) -> Result<u64, AppError> {
        Ok(self.read(|table| table.counter)?)
    }
}

fn to_epoch_seconds(at: DateTime<Utc>) -> f64 {
    at.timestamp_micros() as f64 / 1_000_000.0
}

fn from_epoch_seconds(secs: f64) -> DateTime<Utc> {
    DateTime::from_timestamp_micros((secs * 1_000_000.0).round() as i64).unwrap_or_default()
}
