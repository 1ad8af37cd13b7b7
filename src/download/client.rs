//! HTTP client wrapper for fetching filing PDFs.

use std::time::Duration;

use reqwest::{Client, ClientBuilder, StatusCode};
use tracing::debug;
use url::Url;

use super::error::DownloadError;

/// Default HTTP connect timeout (30 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default HTTP read timeout (2 minutes; filing PDFs are small).
pub const READ_TIMEOUT_SECS: u64 = 120;

/// HTTP client for fetching filing PDFs.
///
/// Created once and reused across the batch, taking advantage of connection
/// pooling. Responses are read fully into memory; the connection resource is
/// released when the response is consumed or dropped, on success and failure
/// alike.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Creates a new HTTP client with default timeouts.
    ///
    /// Default configuration:
    /// - Connect timeout: 30 seconds
    /// - Read timeout: 2 minutes
    /// - Gzip decompression: enabled
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self::with_timeouts(CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS)
    }

    /// Creates a new HTTP client with explicit timeout values.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the supplied
    /// timeout configuration.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_timeouts(connect_timeout_secs: u64, read_timeout_secs: u64) -> Self {
        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .timeout(Duration::from_secs(read_timeout_secs))
            .gzip(true)
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self { client }
    }

    /// Fetches `url` and returns the full response body.
    ///
    /// Only HTTP 200 counts as success; any other status is surfaced as
    /// [`DownloadError::HttpStatus`] with nothing read from the body.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::Timeout`] when the transport times out,
    /// [`DownloadError::Network`] on any other transport failure, and
    /// [`DownloadError::HttpStatus`] on a non-200 response.
    pub async fn fetch(&self, url: &Url) -> Result<Vec<u8>, DownloadError> {
        debug!(url = %url, "issuing GET");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            if e.is_timeout() {
                DownloadError::timeout(url.as_str())
            } else {
                DownloadError::network(url.as_str(), e)
            }
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(DownloadError::http_status(url.as_str(), status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                DownloadError::timeout(url.as_str())
            } else {
                DownloadError::network(url.as_str(), e)
            }
        })?;

        debug!(url = %url, bytes = body.len(), "fetched body");
        Ok(body.to_vec())
    }
}
