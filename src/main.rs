//! dsa-log: personal log of solved practice problems.
//!
//! Usage:
//!   dsa-log add --title "Two Sum" --difficulty Easy --platform LeetCode --date 05/08/2026
//!   dsa-log list
//!   dsa-log edit 3 --platform GfG
//!   dsa-log delete 3
//!   dsa-log search greedy
//!   dsa-log report --target-count 150 --target-date 31/12/2026

use anyhow::{Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dsa_log::config::Config;
use dsa_log::metadata::MetadataEnricher;
use dsa_log::report;
use dsa_log::storage::{DATE_FMT, Difficulty, LogStore, NewEntry};

#[derive(Parser)]
#[command(name = "dsa-log")]
#[command(about = "Personal DSA practice log with enriched metadata", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a solved problem; metadata is filled in automatically
    Add {
        #[arg(long)]
        title: String,
        /// Easy, Medium or Hard
        #[arg(long)]
        difficulty: String,
        #[arg(long)]
        platform: String,
        /// Solve date as dd/mm/yyyy
        #[arg(long)]
        date: String,
        /// Comma-separated personal tags
        #[arg(long, default_value = "")]
        tags: String,
    },
    /// Show all logged problems
    List,
    /// Change the user-entered fields of an entry
    Edit {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        difficulty: Option<String>,
        #[arg(long)]
        platform: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        tags: Option<String>,
    },
    /// Remove an entry
    Delete { id: i64 },
    /// Find entries by keyword (title, difficulty, platform, tag, topic, company)
    Search { keyword: String },
    /// Export a CSV report with stats and target tracking
    Report {
        /// Total problems you aim to solve
        #[arg(long)]
        target_count: Option<u64>,
        /// Deadline as dd/mm/yyyy
        #[arg(long)]
        target_date: Option<String>,
        /// Where to write the CSV (defaults to the report directory)
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    dsa_log::load_env();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dsa_log=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let store = LogStore::open(&config.database_path)?;

    match cli.command {
        Commands::Add {
            title,
            difficulty,
            platform,
            date,
            tags,
        } => add(&config, &store, title, difficulty, platform, date, tags),
        Commands::List => {
            let entries = store.all()?;
            if entries.is_empty() {
                println!("No entries found.");
            } else {
                report::render_entries(&entries);
            }
            Ok(())
        }
        Commands::Edit {
            id,
            title,
            difficulty,
            platform,
            date,
            tags,
        } => edit(&store, id, title, difficulty, platform, date, tags),
        Commands::Delete { id } => {
            if store.delete(id)? {
                println!("Deleted entry {}.", id);
            } else {
                println!("No entry with id {}.", id);
            }
            Ok(())
        }
        Commands::Search { keyword } => {
            let entries = store.search(&keyword)?;
            if entries.is_empty() {
                println!("No entries found.");
            } else {
                report::render_entries(&entries);
            }
            Ok(())
        }
        Commands::Report {
            target_count,
            target_date,
            csv,
        } => run_report(&config, &store, target_count, target_date, csv),
    }
}

fn add(
    config: &Config,
    store: &LogStore,
    title: String,
    difficulty: String,
    platform: String,
    date: String,
    tags: String,
) -> Result<()> {
    let title = title.trim().to_string();
    if title.is_empty() {
        bail!("title cannot be empty");
    }
    if store.contains_title(&title)? {
        bail!("'{}' is already logged", title);
    }
    let difficulty = Difficulty::from_str(&difficulty)?;
    let date = NaiveDate::parse_from_str(date.trim(), DATE_FMT)?;

    let enricher = MetadataEnricher::from_config(config)?;
    info!("enriching metadata for '{}'", title);
    let metadata = enricher.generate_metadata(&title);

    let entry = NewEntry {
        title: title.clone(),
        difficulty,
        platform: platform.trim().to_string(),
        date,
        tags: tags.trim().to_string(),
        metadata,
    };
    let id = store.insert(&entry)?;
    println!(
        "Logged '{}' as entry {} (topic: {}, companies: {}).",
        title, id, entry.metadata.topic, entry.metadata.company_tags
    );
    Ok(())
}

fn edit(
    store: &LogStore,
    id: i64,
    title: Option<String>,
    difficulty: Option<String>,
    platform: Option<String>,
    date: Option<String>,
    tags: Option<String>,
) -> Result<()> {
    let Some(mut entry) = store.get(id)? else {
        bail!("no entry with id {}", id);
    };

    if let Some(title) = title {
        let title = title.trim().to_string();
        if title.is_empty() {
            bail!("title cannot be empty");
        }
        if !title.eq_ignore_ascii_case(&entry.title) && store.contains_title(&title)? {
            bail!("'{}' is already logged", title);
        }
        entry.title = title;
    }
    if let Some(difficulty) = difficulty {
        entry.difficulty = Difficulty::from_str(&difficulty)?;
    }
    if let Some(platform) = platform {
        entry.platform = platform.trim().to_string();
    }
    if let Some(date) = date {
        entry.date = NaiveDate::parse_from_str(date.trim(), DATE_FMT)?;
    }
    if let Some(tags) = tags {
        entry.tags = tags
            .split(',')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(",");
    }

    store.update(&entry)?;
    println!("Edited entry {}.", id);
    Ok(())
}

fn run_report(
    config: &Config,
    store: &LogStore,
    target_count: Option<u64>,
    target_date: Option<String>,
    csv: Option<PathBuf>,
) -> Result<()> {
    let entries = store.all()?;
    if entries.is_empty() {
        println!("No entries found.");
        return Ok(());
    }

    let target_date = target_date
        .map(|d| NaiveDate::parse_from_str(d.trim(), DATE_FMT))
        .transpose()?;
    let today = Local::now().date_naive();
    let summary = report::TargetSummary::compute(entries.len(), target_count, target_date, today);

    let csv_path = csv.unwrap_or_else(|| config.report_dir.join("dsa_report.csv"));
    report::write_csv(&entries, &csv_path)?;
    println!("CSV report written to {}.", csv_path.display());

    report::render_report(&entries, &summary);
    Ok(())
}
