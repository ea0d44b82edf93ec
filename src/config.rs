//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file in the working directory is honoured (loaded by
//! `dotenvy` in `main.rs`).
//!
//! ## Variables
//!
//! - `PORT` - Listening port (default: `8000`); the host is always `0.0.0.0`
//! - `DB_FILE` - Path of the JSON link file (default: `db.json`)
//! - `BASE_URL` - Prefix of returned short URLs (default: `http://0.0.0.0:<PORT>`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

/// Interface the server always binds to.
pub const LISTEN_HOST: &str = "0.0.0.0";

pub const DEFAULT_PORT: u16 = 8000;

pub const DEFAULT_DB_FILE: &str = "db.json";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub db_file: String,
    /// Scheme, host and optional port prepended to issued codes, without a
    /// trailing slash.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(v) => v
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{v}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        let db_file = env::var("DB_FILE").unwrap_or_else(|_| DEFAULT_DB_FILE.to_string());

        let base_url = env::var("BASE_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| default_base_url(port));

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            port,
            db_file,
            base_url,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `port` is 0
    /// - `db_file` is empty
    /// - `base_url` does not start with `http://` or `https://`
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("PORT must be between 1 and 65535");
        }

        if self.db_file.trim().is_empty() {
            anyhow::bail!("DB_FILE must not be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Socket address string the server binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", LISTEN_HOST, self.port)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Link file: {}", self.db_file);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn default_base_url(port: u16) -> String {
    format!("http://{}:{}", LISTEN_HOST, port)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
