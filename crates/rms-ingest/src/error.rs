//! Error types for RMS export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a monitoring export.
///
/// Only whole-file failures surface here; individual rows that fail to parse
/// are skipped by the loader and never escalate.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Export file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the export file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Every candidate encoding reported decode errors.
    #[error("no candidate encoding decoded {path} (attempted: {})", attempted.join(", "))]
    EncodingDetection {
        path: PathBuf,
        attempted: Vec<String>,
    },

    /// The file has no rows at all.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// The first row holds no usable column names.
    #[error("could not detect header row in {path}")]
    NoHeaderDetected { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_path() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/DB.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /data/DB.csv");
    }

    #[test]
    fn encoding_error_lists_attempted_candidates() {
        let err = IngestError::EncodingDetection {
            path: PathBuf::from("DB.csv"),
            attempted: vec!["utf-8".to_string(), "latin1".to_string()],
        };
        assert!(err.to_string().contains("utf-8, latin1"));
    }
}
