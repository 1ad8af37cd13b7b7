//! Sequential HTTP download of planned filings.
//!
//! This module fetches each planned filing PDF one at a time and persists
//! the bodies under a year-scoped destination directory.
//!
//! # Features
//!
//! - One request in flight at a time; source order preserved
//! - Explicit connect/read timeouts (an unresponsive endpoint cannot stall
//!   the batch indefinitely)
//! - Write-then-rename persistence (a saved file is either complete or
//!   absent)
//! - Per-item outcomes collected into a [`BatchReport`]; one failure never
//!   aborts the batch
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use fdfetch::download::{Downloader, HttpClient};
//!
//! # async fn example(plan: Vec<fdfetch::ResolvedFiling>) {
//! let downloader = Downloader::new(HttpClient::new());
//! let report = downloader.run(&plan, Path::new("data/processed/2022")).await;
//! println!("saved {}, skipped {}", report.saved(), report.skipped());
//! # }
//! ```

mod client;
mod error;
mod executor;

pub use client::{CONNECT_TIMEOUT_SECS, HttpClient, READ_TIMEOUT_SECS};
pub use error::DownloadError;
pub use executor::{BatchReport, Downloader, FetchOutcome, FetchStatus};
