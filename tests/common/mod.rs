#![allow(dead_code)]

use axum_test::TestServer;
use linkfile::infrastructure::persistence::JsonFileLinkRepository;
use linkfile::routes::router;
use linkfile::state::AppState;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const BASE_URL: &str = "http://0.0.0.0:8000";

/// A link file inside a temporary directory that lives as long as the value.
pub struct TestStore {
    dir: TempDir,
}

impl TestStore {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("db.json")
    }

    pub fn repository(&self) -> JsonFileLinkRepository {
        JsonFileLinkRepository::new(self.path())
    }

    pub fn state(&self) -> AppState {
        AppState::for_file(self.path().to_str().unwrap(), BASE_URL)
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(router(self.state())).unwrap()
    }

    pub fn write_raw(&self, json: &str) {
        fs::write(self.path(), json).unwrap();
    }

    pub fn read_json(&self) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(self.path()).unwrap()).unwrap()
    }
}
