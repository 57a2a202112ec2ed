//! Record store error types
//!
//! Defines all errors that can occur while loading or reading the dataset.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the record store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Dataset file does not exist at the configured path
    #[error("Dataset not found: {0:?}")]
    MissingDataset(PathBuf),

    /// Underlying SQLite operation failed
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A row in the dataset could not be decoded
    #[error("Corrupt row in {table}: {detail}")]
    CorruptRow { table: &'static str, detail: String },
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::CorruptRow {
            table: "measurement",
            detail: "bad date".to_string(),
        };
        assert_eq!(err.to_string(), "Corrupt row in measurement: bad date");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let store_err: StoreError = io_err.into();
        assert!(matches!(store_err, StoreError::Io(_)));
    }
}
