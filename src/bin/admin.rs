//! CLI administration tool for deeplink-converter.
//!
//! Converts links offline with the same rules the service uses, inspects
//! stored mappings and checks the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Translate a web URL into a deeplink (no database needed)
//! cargo run --bin admin -- convert deeplink "https://www.trendyol.com/sr?q=elbise"
//!
//! # Translate a deeplink into a web URL
//! cargo run --bin admin -- convert url "ty://?Page=Product&ContentId=1925865"
//!
//! # Show the most recently stored mappings
//! cargo run --bin admin -- links list --limit 20
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string (`links` and `db` commands only)

use deeplink_converter::domain::repositories::LinkRepository;
use deeplink_converter::domain::translator::{Target, Translator};
use deeplink_converter::infrastructure::persistence::PgLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing deeplink-converter.
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
    /// Translate a link without touching the database
    Convert {
        #[command(subcommand)]
        action: ConvertAction,
    },

    /// Inspect stored mappings
    Links {
        #[command(subcommand)]
        action: LinksAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum ConvertAction {
    /// Web URL to deeplink
    Deeplink {
        /// Web URL, e.g. "https://www.trendyol.com/sr?q=elbise"
        url: String,
    },

    /// Deeplink to web URL
    Url {
        /// Deeplink, e.g. "ty://?Page=Search&Query=elbise"
        deeplink: String,
    },
}

#[derive(Subcommand)]
enum LinksAction {
    /// List the most recently stored mappings
    List {
        /// Maximum number of mappings to show
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
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

    match cli.command {
        Commands::Convert { action } => handle_convert(action)?,
        Commands::Links { action } => handle_links_action(action, &connect().await?).await?,
        Commands::Db { action } => handle_db_action(action, &connect().await?).await?,
    }

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

/// Translates a link and prints the page it was classified as.
fn handle_convert(action: ConvertAction) -> Result<()> {
    let translator = Translator::new();
    let rules = translator.rules();

    let (input, target, output) = match action {
        ConvertAction::Deeplink { url } => {
            let target = translator.classify_web_url(&url)?;
            let output = target.to_deeplink(rules);
            (url, target, output)
        }
        ConvertAction::Url { deeplink } => {
            let target = translator.classify_deeplink(&deeplink)?;
            let output = target.to_web_url(rules);
            (deeplink, target, output)
        }
    };

    println!("  Input:  {}", input.bright_black());
    println!("  Page:   {}", target.kind().to_string().cyan());
    if let Target::Product(product) = &target {
        println!("  Content:  {}", product.content_id.bright_white());
        if let Some(campaign) = &product.campaign_id {
            println!("  Campaign: {}", campaign.bright_white());
        }
        if let Some(merchant) = &product.merchant_id {
            println!("  Merchant: {}", merchant.bright_white());
        }
    }
    println!("  Output: {}", output.bright_green().bold());

    Ok(())
}

/// Lists stored mappings, newest first.
///
/// # Output Format
///
/// ```text
/// Stored links
///
///   ID    Created            Web URL / Deeplink
///   ----------------------------------------------------------------
///   42    2024-01-15 10:30   https://www.trendyol.com/sr?q=elbise
///                            ty://?Page=Search&Query=elbise
/// ```
async fn handle_links_action(action: LinksAction, pool: &PgPool) -> Result<()> {
    let LinksAction::List { limit } = action;
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));

    println!("{}", "Stored links".bright_blue().bold());
    println!();

    let links = repo
        .list_recent(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links stored yet".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<18} {}",
        "ID".bright_white().bold(),
        "Created".bright_white().bold(),
        "Web URL / Deeplink".bright_white().bold()
    );
    println!("  {}", "-".repeat(64).bright_black());

    for stored in &links {
        println!(
            "  {:<5} {:<18} {}",
            stored.id.to_string().bright_black(),
            stored
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            stored.link.web_url.cyan()
        );
        println!("  {:<5} {:<18} {}", "", "", stored.link.deeplink.green());
    }

    println!();
    println!("  Shown: {}", links.len().to_string().bright_white().bold());
    println!();

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
            let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Links:      {}", links.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
