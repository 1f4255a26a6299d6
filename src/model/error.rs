//! Error types for vidlist.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the binary
//!   - [`ConfigError`](crate::config::ConfigError) - config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - tracing subscriber setup
//!   - [`RecordError`] - reading/parsing the JSON record input
//!   - [`StoreError`] - backing-store writes
//! - [`ListError`] - sentinel misuse on [`VideoListStore`](crate::store::VideoListStore)
//!
//! Out-of-range positions have no error type: position-based list operations
//! ignore them silently.

use std::path::PathBuf;
use thiserror::Error;

use super::VideoId;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Logging setup failed: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    #[error("Failed to load records: {0}")]
    Records(#[from] RecordError),

    #[error("Backing store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors reading the record list handed to the binary.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The given record file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading stdin failed.
    #[error("Failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),

    /// Input is not a JSON array of records.
    #[error("Invalid record JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure reported by a backing store on create/delete.
///
/// Propagated unchanged to callers; the list is left untouched when a write fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store could not be reached or is closed.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The store refused the write for this id.
    #[error("Store rejected {id}: {reason}")]
    Rejected { id: VideoId, reason: String },
}

/// Programmer errors on the list's pagination sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("Invalid list state: {reason}")]
    InvalidState { reason: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_rejected_display_includes_id_and_reason() {
        let err = StoreError::Rejected {
            id: VideoId::new("abc").expect("valid id"),
            reason: "read-only".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("abc"), "got: {}", msg);
        assert!(msg.contains("read-only"), "got: {}", msg);
    }

    #[test]
    fn store_error_converts_into_app_error() {
        fn write() -> Result<(), AppError> {
            Err(StoreError::Unavailable("closed".to_string()))?;
            Ok(())
        }

        assert!(matches!(write(), Err(AppError::Store(_))));
    }

    #[test]
    fn list_error_display_includes_reason() {
        let err = ListError::InvalidState {
            reason: "loading sentinel already present",
        };
        assert_eq!(
            err.to_string(),
            "Invalid list state: loading sentinel already present"
        );
    }
}
