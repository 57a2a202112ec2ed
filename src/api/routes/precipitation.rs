//! Precipitation Routes
//!
//! - `GET /api/v1/precipitation` - precipitation grouped by date
//! - `GET /api/v1/daily_prcp` - flat alternating date/value listing

use axum::{extract::State, Json};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::state::AppState;
use crate::query::PrecipToken;

/// GET /api/v1/precipitation
///
/// Mapping from date to the ordered precipitation values recorded on that
/// date across all stations. Nulls and duplicates are preserved.
pub async fn grouped(
    State(state): State<Arc<AppState>>,
) -> Json<BTreeMap<NaiveDate, Vec<Option<f64>>>> {
    Json(state.engine.grouped_precipitation())
}

/// GET /api/v1/daily_prcp
///
/// The same scan flattened into a single alternating sequence
/// (date, value, date, value, ...).
pub async fn daily(State(state): State<Arc<AppState>>) -> Json<Vec<PrecipToken>> {
    Json(state.engine.daily_precipitation())
}
