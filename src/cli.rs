//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Download House financial-disclosure periodic transaction reports.
///
/// Loads the selected year's XML index, keeps the periodic transaction
/// report filings, and downloads each one's PDF into a year subfolder under
/// the result folder.
#[derive(Parser, Debug)]
#[command(name = "fdfetch")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Which year's filing index to load
    #[arg(long, default_value_t = 2022)]
    pub year: u16,

    /// Directory holding the yearly <year>FD.xml index files
    #[arg(long, default_value = "data/raw")]
    pub data_dir: PathBuf,

    /// Root folder under which downloaded PDFs are organized by year
    #[arg(long, alias = "result_folder", default_value = "data/processed")]
    pub result_folder: PathBuf,
}
