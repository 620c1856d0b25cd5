//! Error types for offer file output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing the target file.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Rows could not be serialized.
    #[error("failed to serialize rows: {source}")]
    Serialize {
        #[source]
        source: csv::Error,
    },

    /// The file could not be created or written.
    #[error("unable to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<csv::Error> for OutputError {
    fn from(source: csv::Error) -> Self {
        Self::Serialize { source }
    }
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
