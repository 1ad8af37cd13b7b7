//! CLI entry point for fdfetch.

use anyhow::{Context, Result};
use clap::Parser;
use fdfetch::{Downloader, FetchConfig, HttpClient, load_plan};
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    let config = FetchConfig::new(args.year, args.data_dir, args.result_folder);

    let index_path = config.index_path();
    let plan = load_plan(&index_path, &config.base_url)
        .with_context(|| format!("loading filing index {}", index_path.display()))?;

    info!(
        year = config.year,
        planned = plan.len(),
        "downloading periodic transaction reports"
    );

    let downloader = Downloader::new(HttpClient::new());
    let report = downloader.run(&plan, &config.output_dir()).await;

    info!(
        saved = report.saved(),
        skipped = report.skipped(),
        failed = report.failed(),
        total = report.total(),
        "run complete"
    );

    // Per-item skips and failures are visible in the report and the logs;
    // they do not produce a non-zero exit.
    Ok(())
}
