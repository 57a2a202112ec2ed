//! Welcome Route
//!
//! - `GET /` - lists the available query routes

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{RouteInfo, WelcomeResponse};
use crate::api::state::AppState;

/// GET /
///
/// Static help payload naming the seven query entry points.
pub async fn welcome(State(state): State<Arc<AppState>>) -> Json<WelcomeResponse> {
    let routes = vec![
        RouteInfo {
            path: "/api/v1/precipitation".to_string(),
            description: "Precipitation values grouped by date across all stations".to_string(),
        },
        RouteInfo {
            path: "/api/v1/daily_prcp".to_string(),
            description: "Flat alternating date/value precipitation listing".to_string(),
        },
        RouteInfo {
            path: "/api/v1/stations".to_string(),
            description: "Station directory with location metadata".to_string(),
        },
        RouteInfo {
            path: "/api/v1/tobs".to_string(),
            description: format!(
                "Temperature observations for station {} over the lookback window \
                 ending at the most recent recorded date",
                state.engine.reference_station()
            ),
        },
        RouteInfo {
            path: "/api/v1/{start}".to_string(),
            description: "Per-date min/avg/max temperature aggregates from start (YYYY-MM-DD)"
                .to_string(),
        },
        RouteInfo {
            path: "/api/v1/{start}/{end}".to_string(),
            description: "Per-date min/avg/max temperature aggregates between start and end"
                .to_string(),
        },
    ];

    Json(WelcomeResponse {
        service: "climata".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        routes,
    })
}
