//! Station Routes
//!
//! - `GET /api/v1/stations` - station directory

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::store::Station;

/// GET /api/v1/stations
///
/// All stations with their metadata.
pub async fn list_stations(State(state): State<Arc<AppState>>) -> Json<Vec<Station>> {
    Json(state.engine.stations().to_vec())
}
