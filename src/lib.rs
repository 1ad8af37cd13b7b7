//! fdfetch Core Library
//!
//! This library fetches US House financial-disclosure periodic transaction
//! reports (PTRs): it loads a yearly XML index, resolves each retained record
//! into a download URL, fetches the PDFs sequentially, and can extract raw
//! text from downloaded PDFs.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`config`] - Run configuration assembled from CLI arguments
//! - [`index`] - Filing-index loading, filtering, and URL resolution
//! - [`download`] - Sequential HTTP download of planned filings
//! - [`extract`] - PDF text extraction

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod download;
pub mod extract;
pub mod index;

// Re-export commonly used types
pub use config::FetchConfig;
pub use download::{BatchReport, DownloadError, Downloader, FetchOutcome, FetchStatus, HttpClient};
pub use extract::{ExtractError, extract_text};
pub use index::{
    DISCLOSURES_BASE_URL, FilingRecord, IndexError, ResolvedFiling, load_plan, resolve_index,
};
