//! Sequential batch executor for planned filing downloads.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info, instrument, warn};

use super::client::HttpClient;
use super::error::DownloadError;
use crate::index::ResolvedFiling;

/// Outcome of one planned download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    /// Body written to the given path.
    Saved(PathBuf),
    /// Remote answered with a non-200 status; nothing was written.
    Skipped {
        /// The HTTP status that caused the skip.
        status: u16,
    },
    /// Transport or filesystem failure; nothing was written.
    Failed(String),
}

/// Per-item record kept in the batch report.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Filer's last name.
    pub last: String,
    /// Document identifier of the filing.
    pub doc_id: String,
    /// What happened to this item.
    pub status: FetchStatus,
}

/// Collected results of a batch run.
///
/// One failure never aborts the batch; the report is how callers see which
/// items were skipped or failed.
#[derive(Debug, Default)]
pub struct BatchReport {
    outcomes: Vec<FetchOutcome>,
}

impl BatchReport {
    /// Returns all per-item outcomes in plan order.
    #[must_use]
    pub fn outcomes(&self) -> &[FetchOutcome] {
        &self.outcomes
    }

    /// Returns the number of filings written to disk.
    #[must_use]
    pub fn saved(&self) -> usize {
        self.count(|s| matches!(s, FetchStatus::Saved(_)))
    }

    /// Returns the number of filings skipped on a non-200 response.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, FetchStatus::Skipped { .. }))
    }

    /// Returns the number of filings that failed on transport or IO errors.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, FetchStatus::Failed(_)))
    }

    /// Returns the total number of items processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    fn count(&self, pred: impl Fn(&FetchStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }

    fn push(&mut self, outcome: FetchOutcome) {
        self.outcomes.push(outcome);
    }
}

/// Sequential download executor.
///
/// Entries are processed strictly in plan order with one request in flight
/// at a time. There is no retry, no rate limiting, and no concurrency; the
/// only state shared across iterations is the report being built.
#[derive(Debug, Clone)]
pub struct Downloader {
    client: HttpClient,
}

impl Downloader {
    /// Creates an executor using the given client for all fetches.
    #[must_use]
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Fetches every planned filing and persists the bodies under
    /// `dest_dir`.
    ///
    /// The destination directory is created on first success (idempotent if
    /// already present). Per-item failures are recorded in the report and do
    /// not affect sibling entries.
    #[instrument(skip(self, plan), fields(dest_dir = %dest_dir.display()))]
    pub async fn run(&self, plan: &[ResolvedFiling], dest_dir: &Path) -> BatchReport {
        info!(planned = plan.len(), "starting downloads");

        let mut report = BatchReport::default();
        for filing in plan {
            let status = match self.fetch_one(filing, dest_dir).await {
                Ok(path) => {
                    info!(file = %path.display(), "file saved");
                    FetchStatus::Saved(path)
                }
                Err(DownloadError::HttpStatus { status, .. }) => {
                    warn!(url = %filing.url, status, "skipping filing");
                    FetchStatus::Skipped { status }
                }
                Err(e) => {
                    warn!(url = %filing.url, error = %e, "download failed");
                    FetchStatus::Failed(e.to_string())
                }
            };
            report.push(FetchOutcome {
                last: filing.last.clone(),
                doc_id: filing.doc_id.clone(),
                status,
            });
        }

        info!(
            saved = report.saved(),
            skipped = report.skipped(),
            failed = report.failed(),
            total = report.total(),
            "batch complete"
        );
        report
    }

    /// Fetches a single filing and writes it into `dest_dir`.
    ///
    /// The body is written to a `.part` file first and renamed into place,
    /// so a saved filing is either complete or absent. When the target name
    /// is already taken (same last name and date within the year), the
    /// filing falls back to a name carrying its document id instead of
    /// overwriting.
    async fn fetch_one(
        &self,
        filing: &ResolvedFiling,
        dest_dir: &Path,
    ) -> Result<PathBuf, DownloadError> {
        let body = self.client.fetch(&filing.url).await?;

        fs::create_dir_all(dest_dir)
            .await
            .map_err(|e| DownloadError::io(dest_dir, e))?;

        let mut path = dest_dir.join(filing.file_name());
        if fs::try_exists(&path)
            .await
            .map_err(|e| DownloadError::io(&path, e))?
        {
            let fallback = dest_dir.join(filing.disambiguated_file_name());
            debug!(
                taken = %path.display(),
                fallback = %fallback.display(),
                "filename collision, using doc id suffix"
            );
            path = fallback;
        }

        let tmp = path.with_extension("pdf.part");
        fs::write(&tmp, &body)
            .await
            .map_err(|e| DownloadError::io(&tmp, e))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| DownloadError::io(&path, e))?;

        Ok(path)
    }
}
