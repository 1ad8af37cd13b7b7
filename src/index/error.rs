//! Error types for index loading and resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading and resolving the filing index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The index file could not be read.
    #[error("failed to read index {path}: {source}")]
    Io {
        /// Path of the index file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The document did not deserialize into the expected index schema
    /// (malformed XML or a missing required column).
    #[error("index schema mismatch: {source}")]
    Schema {
        /// The underlying deserialization error.
        #[source]
        source: quick_xml::DeError,
    },

    /// A field value of a retained record could not be interpreted.
    #[error("malformed {field} value {value:?}")]
    Format {
        /// The index column whose value was rejected.
        field: &'static str,
        /// The offending value.
        value: String,
    },
}

// Helper constructors instead of From impls: the variants need context
// (path, field) that the source errors don't carry.
impl IndexError {
    /// Creates an IO error for the given index path.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a schema error from a deserialization failure.
    pub(crate) fn schema(source: quick_xml::DeError) -> Self {
        Self::Schema { source }
    }

    /// Creates a format error for a rejected field value.
    pub(crate) fn format(field: &'static str, value: impl Into<String>) -> Self {
        Self::Format {
            field,
            value: value.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_includes_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error = IndexError::io(PathBuf::from("data/raw/2022FD.xml"), source);
        let msg = error.to_string();
        assert!(msg.contains("2022FD.xml"), "Expected path in: {msg}");
    }

    #[test]
    fn test_format_error_display_includes_field_and_value() {
        let error = IndexError::format("Year", "20x2");
        let msg = error.to_string();
        assert!(msg.contains("Year"), "Expected field in: {msg}");
        assert!(msg.contains("20x2"), "Expected value in: {msg}");
    }
}
