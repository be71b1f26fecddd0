//! CLI administration tool for the link page.
//!
//! Manages links and shows statistics directly against the database,
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List active links (add --all to include hidden ones)
//! cargo run --bin admin -- link list
//!
//! # Add a link
//! cargo run --bin admin -- link add --title "Recipes" --url https://example.com/recipes
//!
//! # Hide or show a link
//! cargo run --bin admin -- link deactivate 3
//! cargo run --bin admin -- link activate 3
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! `link` and `stats` apply pending migrations first, so they work against a
//! fresh database. `db` commands leave the schema untouched.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use linkbio::application::services::{ClickService, LinkService, StatsService, VisitorService};
use linkbio::config::Config;
use linkbio::domain::calendar::{Clock, SystemClock};
use linkbio::domain::entities::NewLink;
use linkbio::infrastructure::persistence::{
    PgClickRepository, PgLinkRepository, PgVisitorRepository,
};
use linkbio::server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the link page.
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
    /// Manage links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List links in display order
    List {
        /// Include inactive links
        #[arg(short, long)]
        all: bool,
    },

    /// Add a new link
    Add {
        /// Link title (prompted if omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// Target URL (prompted if omitted)
        #[arg(short, long)]
        url: Option<String>,

        /// Short description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Font Awesome icon class, e.g. "fab fa-instagram"
        #[arg(short, long, default_value = "fas fa-link")]
        icon: String,

        /// Position in the list (appended if omitted)
        #[arg(short, long)]
        order: Option<i32>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show a hidden link again
    Activate {
        /// Link ID
        id: i64,
    },

    /// Hide a link from the page
    Deactivate {
        /// Link ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

    let pool = PgPool::connect(&Config::load_database_url())
        .await
        .context("Failed to connect to database")?;

    if !matches!(cli.command, Commands::Db { .. }) {
        server::migrate(&pool).await?;
    }

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

type AdminLinkService = LinkService<PgLinkRepository>;

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    let service = LinkService::new(Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))));

    match action {
        LinkAction::List { all } => list_links(&service, all).await?,
        LinkAction::Add {
            title,
            url,
            description,
            icon,
            order,
            yes,
        } => {
            let title = match title {
                Some(t) => t,
                None => Input::new().with_prompt("Title").interact_text()?,
            };
            let url = match url {
                Some(u) => u,
                None => Input::new()
                    .with_prompt("URL")
                    .with_initial_text("https://")
                    .interact_text()?,
            };
            let new_link = NewLink {
                title,
                description,
                url,
                icon,
                order_index: order,
            };
            add_link(&service, new_link, yes).await?;
        }
        LinkAction::Activate { id } => {
            service
                .set_active(id, true)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to activate link {id}: {e}"))?;
            println!("{}", format!("✅ Link {id} is visible").green().bold());
        }
        LinkAction::Deactivate { id, yes } => deactivate_link(&service, id, yes).await?,
    }

    Ok(())
}

/// Lists links with their position and status.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   ID  Order  Title                          Status    URL
///   ───────────────────────────────────────────────────────────────────────────
///   1   1      Recipes                        ACTIVE    https://example.com/recipes
/// ```
async fn list_links(service: &AdminLinkService, all: bool) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let links = if all {
        service.list_all().await
    } else {
        service.list_active().await
    }
    .map_err(|e| anyhow::anyhow!("Failed to list links: {e}"))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Add one with: {} admin link add",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<6} {:<30} {:<9} {}",
        "ID".bright_white().bold(),
        "Order".bright_white().bold(),
        "Title".bright_white().bold(),
        "Status".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        let status = if link.is_active {
            "ACTIVE".green()
        } else {
            "HIDDEN".red()
        };

        println!(
            "  {:<3} {:<6} {:<30} {:<9} {}",
            link.id.to_string().bright_black(),
            link.order_index.to_string().bright_black(),
            link.title.cyan(),
            status,
            link.url.bright_black()
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Validates and stores a new link after confirmation.
async fn add_link(service: &AdminLinkService, new_link: NewLink, skip_confirm: bool) -> Result<()> {
    println!("{}", "➕ Add Link".bright_blue().bold());
    println!();
    println!("  Title: {}", new_link.title.cyan());
    println!("  URL:   {}", new_link.url.bright_yellow());
    println!("  Icon:  {}", new_link.icon.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this link?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let link = service
        .create_link(new_link)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {e}"))?;

    println!(
        "{}",
        format!("✅ Link created with ID {} at position {}", link.id, link.order_index)
            .green()
            .bold()
    );
    println!();

    Ok(())
}

/// Hides a link after confirmation. Its clicks are kept.
async fn deactivate_link(service: &AdminLinkService, id: i64, skip_confirm: bool) -> Result<()> {
    let link = service
        .get_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Link {id}: {e}"))?;

    if !link.is_active {
        println!("{}", "⚠️  This link is already hidden".yellow());
        return Ok(());
    }

    println!("  Link: {}", link.title.cyan());
    println!("  ID:   {}", link.id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Hide this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .set_active(id, false)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to deactivate link: {e}"))?;

    println!("{}", "✅ Link hidden".green().bold());
    println!();

    Ok(())
}

/// Displays summary and detailed statistics.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let pool = Arc::new(pool.clone());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));

    let links = Arc::new(LinkService::new(link_repository.clone()));
    let clicks = Arc::new(ClickService::new(
        Arc::new(PgClickRepository::new(pool.clone())),
        link_repository,
        clock.clone(),
    ));
    let visitors = Arc::new(VisitorService::new(
        Arc::new(PgVisitorRepository::new(pool)),
        clock.clone(),
    ));
    let stats = StatsService::new(links, clicks, visitors, clock);

    let (summary, detailed) = tokio::try_join!(stats.summary(), stats.detailed(None))
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {e}"))?;

    println!(
        "  Active links:   {}",
        summary.total_links.to_string().bright_green().bold()
    );
    println!(
        "  Clicks:         {} ({} today)",
        summary.total_clicks.to_string().bright_green().bold(),
        summary.clicks_today.to_string().bright_white()
    );
    println!(
        "  Visitors:       {} ({} today)",
        detailed.visitors_total.to_string().bright_green().bold(),
        detailed.visitors_today.to_string().bright_white()
    );
    println!();

    if !detailed.top_links.is_empty() {
        println!("{}", "  Top links".bright_white().bold());
        for top in &detailed.top_links {
            println!(
                "    {:<30} {}",
                top.title.cyan(),
                top.click_count.to_string().bright_yellow()
            );
        }
        println!();
    }

    if !detailed.click_history.is_empty() {
        println!(
            "{}",
            format!("  Clicks per day ({})", detailed.period).bright_white().bold()
        );
        for day in &detailed.click_history {
            println!(
                "    {}  {:>5} total  {:>5} unique",
                day.date.to_string().bright_black(),
                day.total_clicks,
                day.unique_clicks
            );
        }
        println!();
    }

    Ok(())
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
