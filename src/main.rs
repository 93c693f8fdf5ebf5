// src/main.rs
mod config;
mod pipeline;
mod report;
mod storage;
mod trackers;
mod utils;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use config::AppConfig;
use report::{ComposeOptions, ReportLabels};
use report::composer::DEFAULT_MIN_COMMIT_CHARS;
use storage::{StorageLayout, StorageManager};
use utils::AppError;

/// Builds the daily per-team report from Jira issues and GitLab commits
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Report date (YYYY-MM-DD), defaults to today in UTC
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Merge the existing source documents without calling the trackers
    #[arg(short, long)]
    merge_only: bool,

    /// Directory for the Jira source document
    #[arg(long, default_value = "./daily-jira")]
    jira_dir: PathBuf,

    /// Directory for the Git source document
    #[arg(long, default_value = "./daily-git")]
    git_dir: PathBuf,

    /// Output directory for the combined report
    #[arg(short, long, default_value = "./daily-report")]
    report_dir: PathBuf,

    /// Commit sections with fewer characters than this are dropped
    #[arg(long, default_value_t = DEFAULT_MIN_COMMIT_CHARS)]
    min_commit_chars: usize,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging("info");

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    // 3. Load tracker configuration
    let config = AppConfig::from_env()?;
    tracing::info!(
        "Configured {} teams and {} repositories",
        config.team_keys.len(),
        config.repositories.len()
    );

    // 4. Initialize storage
    let storage = StorageManager::new(StorageLayout {
        jira_dir: args.jira_dir,
        git_dir: args.git_dir,
        report_dir: args.report_dir,
    });

    let options = ComposeOptions {
        labels: ReportLabels::default(),
        min_commit_chars: args.min_commit_chars,
    };
    let date = args.date.unwrap_or_else(|| chrono::Utc::now().date_naive());

    // 5. Producers, then merge
    match pipeline::run(&config, &storage, date, &options, args.merge_only).await {
        Ok(path) => {
            tracing::info!("Daily report written to {}", path.display());
            Ok(())
        }
        Err(e) => {
            tracing::error!("Daily report for {} failed: {}", date, e);
            Err(e)
        }
    }
}
