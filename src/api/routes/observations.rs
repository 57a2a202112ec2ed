//! Observation Routes
//!
//! - `GET /api/v1/tobs` - rolling-window temperature observations for the
//!   reference station

use axum::{extract::State, Json};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1/tobs
///
/// Temperature observations for the reference station over the lookback
/// window ending at the dataset's most recent recorded date. 404 when the
/// dataset holds no measurements.
pub async fn rolling_window(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<BTreeMap<NaiveDate, Option<i32>>>> {
    let observations = state.engine.rolling_window_observations()?;
    Ok(Json(observations))
}
