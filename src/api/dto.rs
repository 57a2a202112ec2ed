//! Data Transfer Objects
//!
//! Response types for the API endpoints that are not already covered by the
//! engine's serializable results.

use serde::Serialize;

/// Welcome payload describing the available query routes
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    /// Service name
    pub service: String,
    /// Crate version
    pub version: String,
    /// Available query routes
    pub routes: Vec<RouteInfo>,
}

/// One queryable route
#[derive(Debug, Serialize)]
pub struct RouteInfo {
    /// Request path (path parameters in braces)
    pub path: String,
    /// What the route returns
    pub description: String,
}

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "ok"
    pub status: String,
    /// Seconds since the server started
    pub uptime_seconds: u64,
    /// Number of measurements in the dataset
    pub measurements: usize,
    /// Number of stations in the dataset
    pub stations: usize,
    /// Reference station for rolling-window queries
    pub reference_station: String,
}
