//! CLI administration tool for url-shortener.
//!
//! Inspects stored records and the sequence counter directly in the
//! database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Record count and current counter value
//! cargo run --bin admin -- stats
//!
//! # Look up a short code
//! cargo run --bin admin -- lookup 42
//!
//! # Find the code assigned to a URL
//! cargo run --bin admin -- find https://www.freecodecamp.org
//!
//! # Create the counter if it is missing
//! cargo run --bin admin -- counter init
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use url_shortener::domain::repositories::{SequenceRepository, URLS_NAMESPACE, UrlRepository};
use url_shortener::infrastructure::persistence::{PgSequenceRepository, PgUrlRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing url-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show record count and counter value
    Stats,

    /// Show the record for a short code
    Lookup {
        /// Short code (integer)
        code: i64,
    },

    /// Show the record for an original URL
    Find {
        /// Original URL, exactly as submitted
        url: String,
    },

    /// Sequence counter operations
    Counter {
        #[command(subcommand)]
        action: CounterAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Counter subcommands.
#[derive(Subcommand)]
enum CounterAction {
    /// Create the counter at 0 if it does not exist
    Init,

    /// Print the current counter value
    Show,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;
    let pool = Arc::new(pool);

    let urls = PgUrlRepository::new(pool.clone());
    let sequences = PgSequenceRepository::new(pool.clone());

    match cli.command {
        Commands::Stats => handle_stats(&urls, &sequences).await?,
        Commands::Lookup { code } => handle_lookup(&urls, code).await?,
        Commands::Find { url } => handle_find(&urls, &url).await?,
        Commands::Counter { action } => handle_counter_action(action, &sequences).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays record count and the current counter value.
///
/// The counter can run ahead of the record count: a code is consumed even if
/// the insert that follows it fails.
async fn handle_stats(urls: &PgUrlRepository, sequences: &PgSequenceRepository) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let records = urls
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    let counter = sequences
        .current(URLS_NAMESPACE)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!(
        "  Records: {}",
        records.to_string().bright_green().bold()
    );
    match counter {
        Some(seq) => println!("  Counter: {}", seq.to_string().bright_green().bold()),
        None => println!("  Counter: {}", "not initialized".yellow()),
    }
    println!();

    Ok(())
}

/// Prints the record assigned to `code`.
async fn handle_lookup(urls: &PgUrlRepository, code: i64) -> Result<()> {
    let record = urls
        .find_by_short_code(code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    match record {
        Some(record) => {
            println!("  Code:    {}", record.short_url.to_string().cyan());
            println!("  URL:     {}", record.original_url.bright_white());
            println!("  Created: {}", record.created_at.to_rfc3339().bright_black());
        }
        None => println!("{}", format!("No record for code {}", code).yellow()),
    }

    Ok(())
}

/// Prints the record for an original URL.
async fn handle_find(urls: &PgUrlRepository, url: &str) -> Result<()> {
    let record = urls
        .find_by_original_url(url)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    match record {
        Some(record) => {
            println!("  Code:    {}", record.short_url.to_string().cyan());
            println!("  Created: {}", record.created_at.to_rfc3339().bright_black());
        }
        None => println!("{}", "URL has not been shortened".yellow()),
    }

    Ok(())
}

/// Handles counter commands.
async fn handle_counter_action(
    action: CounterAction,
    sequences: &PgSequenceRepository,
) -> Result<()> {
    match action {
        CounterAction::Init => {
            let created = sequences
                .ensure(URLS_NAMESPACE)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to initialize counter: {}", e))?;

            if created {
                println!("{}", "Counter initialized at 0".green().bold());
            } else {
                println!("{}", "Counter already exists".yellow());
            }
        }
        CounterAction::Show => {
            let current = sequences
                .current(URLS_NAMESPACE)
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

            match current {
                Some(seq) => println!("{}", seq),
                None => println!("{}", "Counter not initialized".yellow()),
            }
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
