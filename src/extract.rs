//! PDF text extraction.
//!
//! Standalone reader for the PDFs the downloader produces (or any other
//! unencrypted, well-formed PDF): page texts are extracted in increasing
//! page-number order and concatenated. The whole document is parsed into
//! memory before any text is returned; there is no partial result on
//! failure.

use std::path::{Path, PathBuf};

use lopdf::Document;
use thiserror::Error;

/// Errors that can occur while extracting text from a PDF.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the PDF file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The PDF parser rejected the document (corrupt structure, encrypted
    /// content, non-PDF bytes).
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path of the PDF file.
        path: PathBuf,
        /// The underlying parser error.
        #[source]
        source: lopdf::Error,
    },
}

/// Extracts the full text of the PDF at `path`.
///
/// Text is pulled from each page in increasing page-number order and
/// concatenated; no separator is inserted between pages. A document with
/// zero pages yields an empty string.
///
/// # Errors
///
/// Returns [`ExtractError::Io`] when the file cannot be read and
/// [`ExtractError::Parse`] when the document or one of its pages cannot be
/// parsed.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let doc = Document::load_mem(&bytes).map_err(|source| ExtractError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut text = String::new();
    for page_number in doc.get_pages().keys() {
        let page_text = doc
            .extract_text(&[*page_number])
            .map_err(|source| ExtractError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        text.push_str(&page_text);
    }

    Ok(text)
}
