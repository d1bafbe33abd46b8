//! CLI administration tool for url-encoder.
//!
//! Inspects and maintains the url mapping table without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Live / expired row counts
//! cargo run --bin admin -- mappings stats
//!
//! # Delete expired mappings now
//! cargo run --bin admin -- mappings sweep
//!
//! # Resolve a short id
//! cargo run --bin admin -- mappings resolve mhvXdrZT4jP5T8vBxuvm75
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! Reads the same environment as the server (see `url_encoder::config`).

use url_encoder::application::services::UrlEncoderService;
use url_encoder::config::Config;
use url_encoder::domain::repositories::UrlMappingRepository;
use url_encoder::error::AppError;
use url_encoder::infrastructure::persistence::PgUrlMappingRepository;
use url_encoder::server::connect_pool;
use url_encoder::utils::short_id::ShortUuidGenerator;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing url-encoder.
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
    /// Inspect and maintain url mappings
    Mappings {
        #[command(subcommand)]
        action: MappingAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Url mapping subcommands.
#[derive(Subcommand)]
enum MappingAction {
    /// Show live and expired mapping counts
    Stats,

    /// Delete every mapping whose expiry date has passed
    Sweep {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Print the original url for a short id
    Resolve {
        /// Short url id
        short_url_id: String,
    },
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

    let config = Config::from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Mappings { action } => handle_mapping_action(action, &pool, &config).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches url mapping commands.
async fn handle_mapping_action(action: MappingAction, pool: &PgPool, config: &Config) -> Result<()> {
    let repo = Arc::new(PgUrlMappingRepository::new(Arc::new(pool.clone())));
    let encoder = UrlEncoderService::new(
        repo.clone(),
        Arc::new(ShortUuidGenerator::new()),
        config.hold_duration_days,
    );

    match action {
        MappingAction::Stats => show_stats(repo.as_ref()).await?,
        MappingAction::Sweep { yes } => sweep(&encoder, yes).await?,
        MappingAction::Resolve { short_url_id } => resolve(&encoder, &short_url_id).await?,
    }

    Ok(())
}

/// Displays live and expired mapping counts relative to today (UTC).
async fn show_stats(repo: &PgUrlMappingRepository) -> Result<()> {
    println!("{}", "📊 Url mappings".bright_blue().bold());
    println!();

    let today = Utc::now().date_naive();
    let counts = repo
        .count_by_status(today)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count mappings: {}", e))?;

    println!(
        "  Live:     {}",
        counts.live.to_string().bright_green().bold()
    );
    println!(
        "  Expired:  {}",
        counts.expired.to_string().bright_yellow().bold()
    );
    println!();

    if counts.expired > 0 {
        println!(
            "  Remove expired rows with: {} admin mappings sweep",
            "cargo run --bin".bright_cyan()
        );
        println!();
    }

    Ok(())
}

/// Runs the expiry sweep once, with a confirmation prompt unless `--yes`.
async fn sweep(encoder: &UrlEncoderService, skip_confirm: bool) -> Result<()> {
    println!("{}", "🧹 Sweep expired mappings".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete every mapping that expired before today?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = encoder
        .sweep_expired(Utc::now().date_naive())
        .await
        .map_err(|e| anyhow::anyhow!("Sweep failed: {}", e))?;

    println!(
        "{} {}",
        "✅ Deleted mappings:".green().bold(),
        deleted.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Resolves a short id exactly as the redirect endpoint does.
async fn resolve(encoder: &UrlEncoderService, short_url_id: &str) -> Result<()> {
    match encoder.decode(short_url_id).await {
        Ok(url) => {
            println!("  {} → {}", short_url_id.cyan(), url.bright_white());
            Ok(())
        }
        Err(AppError::NotFound { .. }) => {
            println!("  {} {}", short_url_id.cyan(), "not found".yellow());
            Ok(())
        }
        Err(e) => Err(e).context("Failed to resolve short url"),
    }
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
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
