// src/main.rs

//! jobsift: EURES job search filter CLI
//!
//! Fetches job listings page by page and writes the ones whose description
//! mentions relocation assistance or visa sponsorship to a CSV file.

use clap::Parser;

use jobsift::config::Config;
use jobsift::pipeline::run_search;

/// Fetch EURES job listings and filter them by description keywords.
#[derive(Parser, Debug)]
#[command(
    name = "jobsift",
    version,
    about = "Fetch EURES job listings and keep the ones mentioning relocation or sponsorship"
)]
struct Cli {
    /// Limit the number of pages fetched
    #[arg(long)]
    max_pages: Option<u32>,
}

/// Initialize logging.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging();

    let config = Config::default();
    if let Err(error) = config.validate() {
        log::error!("{error}");
        std::process::exit(1);
    }

    match run_search(&config, cli.max_pages).await {
        Ok(summary) => {
            log::info!(
                "Done: {} matches from {} listings across {} pages -> {}",
                summary.matches_written,
                summary.listings_seen,
                summary.pages_fetched,
                config.output.path.display()
            );
        }
        Err(error) => {
            log::error!("Run aborted: {error}");
            std::process::exit(1);
        }
    }
}
