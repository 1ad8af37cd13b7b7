//! Run configuration assembled from CLI arguments.
//!
//! The year and folder layout are passed around as an explicit struct rather
//! than read ambiently, so the loader and executor can be driven from tests
//! with scratch directories and a mock base URL.

use std::path::PathBuf;

use url::Url;

use crate::index::DISCLOSURES_BASE_URL;

/// Configuration for one fetch run.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Reporting year whose index is loaded.
    pub year: u16,
    /// Directory holding the yearly `<year>FD.xml` index files.
    pub data_dir: PathBuf,
    /// Root under which downloaded PDFs are organized by year subfolder.
    pub result_folder: PathBuf,
    /// Base address of the disclosure service.
    pub base_url: Url,
}

impl FetchConfig {
    /// Creates a config pointing at the production disclosure service.
    ///
    /// # Panics
    ///
    /// Never panics in practice: the static base URL constant is valid.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new(year: u16, data_dir: impl Into<PathBuf>, result_folder: impl Into<PathBuf>) -> Self {
        let base_url =
            Url::parse(DISCLOSURES_BASE_URL).expect("static base URL must be parseable");
        Self {
            year,
            data_dir: data_dir.into(),
            result_folder: result_folder.into(),
            base_url,
        }
    }

    /// Replaces the base URL, e.g. with a mock server address in tests.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Path of the year's index file, `<data_dir>/<year>FD.xml`.
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}FD.xml", self.year))
    }

    /// Destination directory for this year's PDFs,
    /// `<result_folder>/<year>/`.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.result_folder.join(self.year.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_index_path_uses_year_and_data_dir() {
        let config = FetchConfig::new(2022, "data/raw", "data/processed");
        assert_eq!(config.index_path(), PathBuf::from("data/raw/2022FD.xml"));
    }

    #[test]
    fn test_output_dir_nests_year_under_result_folder() {
        let config = FetchConfig::new(2022, "data/raw", "out");
        assert_eq!(config.output_dir(), PathBuf::from("out/2022"));
    }

    #[test]
    fn test_default_base_url_is_disclosure_service() {
        let config = FetchConfig::new(2022, "data/raw", "data/processed");
        assert_eq!(config.base_url.as_str(), "https://disclosures-clerk.house.gov/");
    }

    #[test]
    fn test_with_base_url_overrides() {
        let config = FetchConfig::new(2022, "data/raw", "data/processed")
            .with_base_url(Url::parse("http://127.0.0.1:9999").unwrap());
        assert_eq!(config.base_url.host_str(), Some("127.0.0.1"));
    }
}
