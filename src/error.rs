//! Error types for the CSV loading boundary
//!
//! The engines themselves never fail: degenerate numeric input produces a
//! degenerate (zero) result. Errors only arise when reading batch/rate files
//! from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading loan batches or rate tables from CSV
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("row {row}: {message}")]
    Row { row: usize, message: String },

    #[error("{message}")]
    Series { message: String },
}

impl LoaderError {
    pub(crate) fn row(row: usize, message: impl Into<String>) -> Self {
        LoaderError::Row {
            row,
            message: message.into(),
        }
    }

    pub(crate) fn series(message: impl Into<String>) -> Self {
        LoaderError::Series {
            message: message.into(),
        }
    }
}
