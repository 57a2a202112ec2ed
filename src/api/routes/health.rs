//! Health Routes
//!
//! - `GET /health/live` - liveness probe
//! - `GET /health/ready` - readiness probe
//! - `GET /health` - full health status

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Process is up.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// The dataset is loaded before the listener binds, so readiness follows
/// liveness; the body reports whether the dataset is non-empty.
pub async fn readiness(State(state): State<Arc<AppState>>) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "ready": true, "dataset_empty": state.store.is_empty() })),
    )
}

/// GET /health
///
/// Full health status including dataset counts.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds: state.uptime_seconds(),
        measurements: state.store.len(),
        stations: state.store.stations().len(),
        reference_station: state.engine.reference_station().to_string(),
    })
}
