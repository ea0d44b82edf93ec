//! Offline administration tool for the link file.
//!
//! Works directly on `DB_FILE` through the same repository the server uses,
//! so it can inspect or extend the store while the server is running.
//!
//! # Usage
//!
//! ```bash
//! # List every link
//! cargo run --bin linkfile-admin -- list
//!
//! # Show one link
//! cargo run --bin linkfile-admin -- show G9
//!
//! # Shorten a URL without going through HTTP
//! cargo run --bin linkfile-admin -- shorten https://example.com/a
//!
//! # Counter and hit totals
//! cargo run --bin linkfile-admin -- stats
//! ```
//!
//! # Environment Variables
//!
//! - `DB_FILE` - Path of the link file (default: `db.json`, overridable with `--file`)
//! - `BASE_URL` - Prefix used when printing short URLs

use linkfile::config::{Config, DEFAULT_DB_FILE};
use linkfile::prelude::*;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing the link file.
#[derive(Parser)]
#[command(name = "linkfile-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Link file to operate on (defaults to DB_FILE)
    #[arg(short, long, global = true)]
    file: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all links with their hits
    List,

    /// Show a single link
    Show {
        /// Short code to look up
        code: String,
    },

    /// Shorten a URL, reusing the existing code if it is already known
    Shorten {
        /// Target URL (must start with http:// or https://)
        url: String,
    },

    /// Show counter and hit totals
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    let db_file = cli
        .file
        .or_else(|| Some(config.db_file.clone()).filter(|f| !f.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_DB_FILE.to_string());

    let service = LinkService::new(Arc::new(JsonFileLinkRepository::new(&db_file)));

    match cli.command {
        Commands::List => list_links(&service).await?,
        Commands::Show { code } => show_link(&service, &code).await?,
        Commands::Shorten { url } => shorten(&service, &config.base_url, &url).await?,
        Commands::Stats => show_stats(&service, &db_file).await?,
    }

    Ok(())
}

/// Lists all links in issue order.
///
/// # Output Format
///
/// ```text
/// Links
///
///   Code     Hits     URL
///   ────────────────────────────────────────────────
///   G9       1        https://example.com/a
/// ```
async fn list_links(service: &LinkService<JsonFileLinkRepository>) -> Result<()> {
    println!("{}", "Links".bright_blue().bold());
    println!();

    let links = service
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links yet".yellow());
        return Ok(());
    }

    println!(
        "  {:<8} {:<8} {}",
        "Code".bright_white().bold(),
        "Hits".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for link in &links {
        println!(
            "  {:<8} {:<8} {}",
            link.code.cyan(),
            link.hits.to_string().bright_green(),
            link.url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());

    Ok(())
}

async fn show_link(service: &LinkService<JsonFileLinkRepository>, code: &str) -> Result<()> {
    let link = match service.lookup(code).await {
        Ok(link) => link,
        Err(AppError::NotFound(_)) => anyhow::bail!("Short code '{}' not found", code),
        Err(e) => return Err(anyhow::anyhow!("Failed to look up link: {}", e)),
    };

    println!("  Code:    {}", link.code.cyan().bold());
    println!("  URL:     {}", link.url);
    println!(
        "  Created: {}",
        link.created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!("  Hits:    {}", link.hits.to_string().bright_green());

    Ok(())
}

async fn shorten(
    service: &LinkService<JsonFileLinkRepository>,
    base_url: &str,
    url: &str,
) -> Result<()> {
    let shortened = service
        .shorten(Some(url))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten: {}", e))?;

    let status = if shortened.is_created() {
        "created".green()
    } else {
        "existing".yellow()
    };

    let link = shortened.link();
    println!(
        "  {} ({})",
        service.short_url(base_url, &link.code).bright_white().bold(),
        status
    );

    Ok(())
}

async fn show_stats(service: &LinkService<JsonFileLinkRepository>, db_file: &str) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let stats = service
        .stats()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read statistics: {}", e))?;

    println!("  File:    {}", db_file.bright_white());
    println!("  Counter: {}", stats.counter.to_string().bright_green().bold());
    println!("  Links:   {}", stats.links.to_string().bright_green().bold());
    println!("  Hits:    {}", stats.total_hits.to_string().bright_green().bold());

    Ok(())
}
