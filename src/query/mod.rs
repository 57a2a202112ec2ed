//! Query/Aggregation layer
//!
//! The only part of the service with real logic: validates date inputs,
//! resolves dataset-relative time windows, and computes the derived views
//! over the record store.
//!
//! # Pipeline
//!
//! ```text
//! Request → QueryEngine → (validate, window) → RecordStore → result
//! ```

pub mod engine;
pub mod error;
pub mod validate;
pub mod window;

pub use engine::{DateAggregate, PrecipToken, QueryEngine};
pub use error::{QueryError, QueryResult};
pub use validate::{parse_date, validate_date};
pub use window::{lookback_window, most_recent_date};
