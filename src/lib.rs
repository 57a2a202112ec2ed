//! # Climata
//!
//! Read-only query service over a fixed historical climate dataset: station
//! metadata and per-station daily measurements (precipitation, temperature
//! observation).
//!
//! ## Features
//!
//! - **Immutable dataset**: loaded once from SQLite at startup, shared
//!   lock-free across requests
//! - **Derived views**: grouped precipitation, station directory,
//!   rolling-window observations, date-bounded aggregates
//! - **Dataset-relative windows**: the rolling window ends at the most
//!   recent recorded date, not wall-clock time
//! - **Strict date contracts**: inputs must be exact zero-padded YYYY-MM-DD
//!   strings naming recorded dates
//!
//! ## Modules
//!
//! - [`store`]: read-only record store over the two datasets
//! - [`query`]: date validation, window resolution, and the query engine
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use climata::query::QueryEngine;
//! use climata::store::RecordStore;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(RecordStore::open(Path::new("climate.sqlite"))?);
//!     let engine = QueryEngine::new(Arc::clone(&store), "USC00519281", 365);
//!
//!     let observations = engine.rolling_window_observations()?;
//!     println!("{} observed days in the window", observations.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod query;
pub mod store;

// Re-export top-level types for convenience
pub use store::{Measurement, RecordStore, Station, StoreError, StoreResult};

pub use query::{
    lookback_window, most_recent_date, validate_date, DateAggregate, PrecipToken, QueryEngine,
    QueryError, QueryResult,
};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{
    Config, ConfigError, ApiConfig as ConfigApiConfig, DatasetConfig, LoggingConfig,
};
