mod crawl;
mod db;
mod fetch;
mod parser;
mod record;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::crawl::Crawler;
use crate::fetch::HttpFetcher;
use crate::parser::index::ListingEntry;

#[derive(Parser)]
#[command(
    name = "did_scraper",
    about = "Desert Island Discs castaway scraper: occupations, discs, books and luxuries"
)]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, default_value = db::DB_PATH)]
    db: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape every index page, skipping shows already stored (default)
    Run,
    /// Scrape a single index page
    Page {
        /// 1-based index page number
        num: usize,
    },
    /// Scrape a single castaway detail page
    Guest {
        /// Detail page URL (absolute, or relative to the BBC site)
        url: String,
        /// Castaway name as listed in the index
        #[arg(long)]
        name: String,
        /// Broadcast date (YYYY-MM-DD); read from the page when omitted
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Occupation teaser text
        #[arg(long)]
        occupation: Option<String>,
    },
    /// Show record counts
    Stats,
    /// Print stored records as JSON lines
    Export {
        /// Only records for this castaway
        #[arg(long)]
        guest: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = execute(cli).await;

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_duration(elapsed));
    }

    result
}

/// Run the chosen subcommand.
async fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let mut crawler = open_crawler(&cli.db)?;
            let tally = crawler.run().await?;
            tally.print();
            Ok(())
        }
        Commands::Page { num } => {
            let mut crawler = open_crawler(&cli.db)?;
            let tally = crawler.process_index(num).await?;
            tally.print();
            Ok(())
        }
        Commands::Guest {
            url,
            name,
            date,
            occupation,
        } => {
            let mut crawler = open_crawler(&cli.db)?;
            let url = crawler
                .site()
                .join(&url)
                .with_context(|| format!("Invalid castaway URL {:?}", url))?;
            let entry = ListingEntry {
                name,
                url,
                date,
                occupation,
            };
            let outcome = crawler.process_guest(&entry).await?;
            println!("{}: {}", entry.name, outcome);
            Ok(())
        }
        Commands::Stats => {
            let conn = db::connect(&cli.db)?;
            db::init_schema(&conn)?;
            let s = db::get_stats(&conn)?;
            println!("Rows:      {}", s.rows);
            println!("Shows:     {}", s.shows);
            println!("Completed: {}", s.completed);
            for (kind, n) in &s.by_type {
                println!("  {:<15} {}", kind, n);
            }
            Ok(())
        }
        Commands::Export { guest } => {
            let conn = db::connect(&cli.db)?;
            db::init_schema(&conn)?;
            for row in db::fetch_records(&conn, guest.as_deref())? {
                println!("{}", serde_json::to_string(&row)?);
            }
            Ok(())
        }
    }
}

/// Load the completed shows, then make sure the table exists for appending.
fn open_crawler(path: &std::path::Path) -> anyhow::Result<Crawler<HttpFetcher, rusqlite::Connection>> {
    let conn = db::connect(path)?;
    let completed = db::load_completed(&conn)?;
    println!("Database contains {} past entries", completed.len());
    db::init_schema(&conn)?;
    Crawler::new(HttpFetcher::new()?, conn, completed)
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
