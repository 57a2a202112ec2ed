//! Query error types
//!
//! Defines all error conditions that can occur while validating inputs and
//! computing derived views. Every variant is request-scoped; none of them is
//! fatal to the service process.

use thiserror::Error;

/// Errors that can occur during query operations
#[derive(Error, Debug)]
pub enum QueryError {
    /// A supplied date string does not match the YYYY-MM-DD contract
    #[error("Invalid date {0:?}: expected format YYYY-MM-DD")]
    InvalidDate(String),

    /// Syntactically valid date(s) absent from the measurement dataset
    #[error("Date(s) not present in the dataset: {}", .0.join(", "))]
    DateNotFound(Vec<String>),

    /// A most-recent-date computation was requested against zero measurements
    #[error("Dataset contains no measurements")]
    EmptyDataset,

    /// Underlying storage failure, surfaced as a hard request failure
    #[error("Storage unavailable: {0}")]
    Store(#[from] crate::store::StoreError),
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QueryError::InvalidDate("2012-7-12".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid date \"2012-7-12\": expected format YYYY-MM-DD"
        );

        let err = QueryError::DateNotFound(vec!["2010-01-01".into(), "2011-02-02".into()]);
        assert_eq!(
            err.to_string(),
            "Date(s) not present in the dataset: 2010-01-01, 2011-02-02"
        );
    }
}
