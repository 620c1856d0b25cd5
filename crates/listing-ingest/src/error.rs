//! Error types for product listing ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the source file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file not found.
    #[error("can't find file {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("unable to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Encoding Errors ===
    /// File starts with the byte-order mark of a different encoding.
    #[error("unsupported encoding {encoding} in file {path} (expected {expected})")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
        expected: &'static str,
    },

    /// File contains bytes that are not valid in the expected encoding.
    #[error("file {path} is not valid {encoding}")]
    MalformedText {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse a delimited record.
    #[error("failed to parse {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/products.csv"),
        };
        assert_eq!(err.to_string(), "can't find file /path/to/products.csv");
    }

    #[test]
    fn test_unsupported_encoding_display() {
        let err = IngestError::UnsupportedEncoding {
            path: PathBuf::from("products.csv"),
            encoding: "UTF-16LE",
            expected: "UTF-8",
        };
        assert_eq!(
            err.to_string(),
            "unsupported encoding UTF-16LE in file products.csv (expected UTF-8)"
        );
    }
}
