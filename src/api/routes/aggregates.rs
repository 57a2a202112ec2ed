//! Aggregate Routes
//!
//! Date-bounded min/avg/max over temperature observations.
//!
//! - `GET /api/v1/{start}` - single lower bound
//! - `GET /api/v1/{start}/{end}` - inclusive range

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::query::DateAggregate;

/// GET /api/v1/{start}
///
/// Per-date aggregates from `start` onwards. 400 when the date string is
/// malformed, 404 when it is not a recorded date.
pub async fn from_start(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> ApiResult<Json<Vec<DateAggregate>>> {
    let rows = state.engine.aggregates_from(&start)?;
    Ok(Json(rows))
}

/// GET /api/v1/{start}/{end}
///
/// Per-date aggregates over the inclusive `[start, end]` range. Both bounds
/// must be recorded dates; an inverted range yields an empty list.
pub async fn between(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> ApiResult<Json<Vec<DateAggregate>>> {
    let rows = state.engine.aggregates_between(&start, &end)?;
    Ok(Json(rows))
}
