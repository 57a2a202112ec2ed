//! Record Store
//!
//! Read-only accessor over the two climate datasets: per-station daily
//! measurements and station metadata. The datasets are loaded once from a
//! SQLite file at startup and never mutated afterwards, so the store can be
//! shared across concurrent requests behind an `Arc` without locking.
//!
//! Measurements are held ordered by date (stable original row order within a
//! date); every query below is equivalent to a linear scan with the stated
//! filter.

pub mod error;
pub mod records;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use records::RecordStore;
pub use types::{Measurement, Station, DATE_FORMAT};
