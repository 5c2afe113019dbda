//! Command-line client for the top articles rankings.
//!
//! Queries the same upstream APIs as the dashboard, without running the server.
//!
//! # Usage
//!
//! ```bash
//! # Aggregated rankings for yesterday, as cards
//! cargo run --bin topviews -- africa
//!
//! # One page of a given day as a table
//! cargo run --bin topviews -- africa --date 2024-03-02 --view list --page 2
//!
//! # One country (prompts for the code when omitted)
//! cargo run --bin topviews -- country KE --access mobile-web
//!
//! # Resolve coordinates to a country
//! cargo run --bin topviews -- locate -- -4.32 15.31
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (`PAGEVIEWS_API_URL`, `LOCATION_API_URL`, `COUNTRIES`,
//! `FETCH_JOIN_POLICY`, ...), see [`top_africa::config`].

use top_africa::config;
use top_africa::domain::countries;
use top_africa::domain::entities::{AccessPlatform, ArticleRecord, ReportDate, ViewMode};
use top_africa::domain::pagination::Page;
use top_africa::server::build_state;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::*;
use dialoguer::Input;

/// CLI for browsing the most viewed Wikimedia articles across Africa.
#[derive(Parser)]
#[command(name = "topviews")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregated top articles of all configured countries
    Africa {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Top articles of one country
    Country {
        /// ISO 3166-1 alpha-2 code (e.g. "KE")
        code: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Resolve coordinates to a country
    Locate {
        /// Latitude in degrees
        #[arg(allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
}

/// Date, platform and page selection shared by the ranking commands.
#[derive(Args)]
struct PageArgs {
    /// Day to report, YYYY-MM-DD (default: yesterday)
    #[arg(short, long)]
    date: Option<ReportDate>,

    /// Access platform
    #[arg(short, long, default_value = "all-access")]
    access: AccessPlatform,

    /// Layout, which also sets the page size
    #[arg(long, value_enum)]
    view: Option<ViewArg>,

    /// Page number
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,
}

#[derive(Clone, Copy, ValueEnum)]
enum ViewArg {
    Gallery,
    List,
}

impl From<ViewArg> for ViewMode {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Gallery => ViewMode::Gallery,
            ViewArg::List => ViewMode::List,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let state = build_state(&config)?;

    match cli.command {
        Commands::Africa { page } => {
            let date = page.date.unwrap_or_default();
            println!(
                "{} {}",
                "🌍 Top articles in Africa on".bright_blue().bold(),
                date.heading().bright_white().bold()
            );

            let records = state
                .articles_service
                .continent_top(date, page.access)
                .await
                .map_err(|e| anyhow::anyhow!("{}: {}", e.message(), e.details()))?;

            print_page(&records, page.view.map_or(ViewMode::Gallery, Into::into), page.page);
        }
        Commands::Country { code, page } => {
            let code = match code {
                Some(code) => code,
                None => Input::new()
                    .with_prompt("Country code")
                    .with_initial_text(countries::DEFAULT_COUNTRY)
                    .interact_text()?,
            };
            let date = page.date.unwrap_or_default();
            println!(
                "{} {} {} {}",
                "📍 Top articles in".bright_blue().bold(),
                countries::country_name(&code).cyan().bold(),
                "on".bright_blue().bold(),
                date.heading().bright_white().bold()
            );

            let records = state
                .articles_service
                .country_top(&code, date, page.access)
                .await
                .map_err(|e| anyhow::anyhow!("{}: {}", e.message(), e.details()))?;

            print_page(&records, page.view.map_or(ViewMode::List, Into::into), page.page);
        }
        Commands::Locate { lat, lon } => {
            let code = state
                .location_service
                .locate(lat, lon)
                .await
                .map_err(|e| anyhow::anyhow!("{}: {}", e.message(), e.details()))?;

            println!(
                "  {} {} ({})",
                "📌".bright_blue(),
                countries::country_name(&code).cyan().bold(),
                code.bright_white()
            );
        }
    }

    Ok(())
}

/// Prints one page of `records` as cards or as a table.
///
/// # Output Format
///
/// ```text
///   Rank  Article                              Country          Views       Project
///   ─────────────────────────────────────────────────────────────────────────────────
///   1     Nairobi                              Kenya            1500        en.wikipedia
/// ```
fn print_page(records: &[ArticleRecord], view: ViewMode, page: u32) {
    println!();

    let page = Page::slice(records, page, view.page_size());
    if page.is_empty() {
        println!("{}", "  No Article Post".yellow());
        println!();
        return;
    }

    match view {
        ViewMode::Gallery => {
            for record in &page.items {
                println!(
                    "  {} {}",
                    format!("#{}", record.rank).bright_black(),
                    record.display_title().bright_white().bold()
                );
                println!(
                    "     {} · {} views · {}",
                    record.country.cyan(),
                    record.views.to_string().green(),
                    record.project.bright_black()
                );
                println!("     {}", record.url().underline());
                println!();
            }
        }
        ViewMode::List => {
            println!(
                "  {:<5} {:<36} {:<16} {:<11} {}",
                "Rank".bright_white().bold(),
                "Article".bright_white().bold(),
                "Country".bright_white().bold(),
                "Views".bright_white().bold(),
                "Project".bright_white().bold()
            );
            println!("  {}", "─".repeat(85).bright_black());

            for record in &page.items {
                println!(
                    "  {:<5} {:<36} {:<16} {:<11} {}",
                    record.rank.to_string().bright_black(),
                    truncate(&record.display_title(), 36),
                    record.country.cyan(),
                    record.views.to_string().green(),
                    record.project.bright_black()
                );
            }
            println!();
        }
    }

    println!(
        "  Page {} of {} ({} articles)",
        page.page.to_string().bright_white().bold(),
        page.total_pages,
        page.total_items
    );
    println!();
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let cut: String = text.chars().take(width - 1).collect();
        format!("{cut}…")
    }
}
