//! Error types for sheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a sheet from disk.
///
/// Data-shape problems inside a readable sheet never surface here; they
/// degrade to defaults further down the pipeline.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file does not exist.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected a record.
    #[error("failed to parse CSV {path}: {source}")]
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
            path: PathBuf::from("/tmp/chronologies.csv"),
        };
        assert_eq!(err.to_string(), "input file not found: /tmp/chronologies.csv");
    }
}
