//! Climata REST API
//!
//! Thin HTTP boundary over the query engine, built with Axum. The boundary
//! only decodes path parameters and serializes engine results; all query
//! logic lives in [`crate::query`].
//!
//! # Endpoints
//!
//! ## Queries
//! - `GET /api/v1/precipitation` - precipitation grouped by date
//! - `GET /api/v1/daily_prcp` - flat alternating date/value listing
//! - `GET /api/v1/stations` - station directory
//! - `GET /api/v1/tobs` - rolling-window observations for the reference station
//! - `GET /api/v1/{start}` - per-date aggregates from a start date
//! - `GET /api/v1/{start}/{end}` - per-date aggregates over a date range
//!
//! ## Help
//! - `GET /` - welcome payload listing the query routes
//!
//! ## Health
//! - `GET /health/live` - liveness probe
//! - `GET /health/ready` - readiness probe
//! - `GET /health` - full health status

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/precipitation", get(routes::precipitation::grouped))
        .route("/daily_prcp", get(routes::precipitation::daily))
        .route("/stations", get(routes::stations::list_stations))
        .route("/tobs", get(routes::observations::rolling_window))
        // Static routes above take precedence over the date captures
        .route("/:start", get(routes::aggregates::from_start))
        .route("/:start/:end", get(routes::aggregates::between));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::welcome::welcome))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Climata API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Climata API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryEngine;
    use crate::store::{Measurement, RecordStore, Station};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use tower::util::ServiceExt;

    const REFERENCE: &str = "USC00519281";

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn test_app(measurements: Vec<Measurement>) -> Router {
        let store = Arc::new(RecordStore::from_records(
            measurements,
            vec![Station {
                id: 1,
                station_code: REFERENCE.to_string(),
                name: "WAIHEE 837.5, HI US".to_string(),
                latitude: 21.4517,
                longitude: -157.8494,
                elevation: 32.9,
            }],
        ));
        let engine = Arc::new(QueryEngine::new(Arc::clone(&store), REFERENCE, 365));
        let state = AppState::new(store, engine, ApiConfig::default());
        build_router(state)
    }

    fn sample_measurements() -> Vec<Measurement> {
        vec![
            Measurement::new(REFERENCE, date("2012-07-12"))
                .precipitation(0.5)
                .observation(71),
            Measurement::new("USC00519397", date("2012-07-12"))
                .precipitation(0.7)
                .observation(68),
            Measurement::new(REFERENCE, date("2012-12-30")).observation(65),
        ]
    }

    async fn get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_welcome() {
        let response = get(test_app(sample_measurements()), "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["service"], "climata");
        assert!(json["routes"].as_array().unwrap().len() >= 6);
    }

    #[tokio::test]
    async fn test_health_routes() {
        let app = test_app(sample_measurements());

        let response = get(app.clone(), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = get(app.clone(), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["measurements"], 3);
        assert_eq!(json["reference_station"], REFERENCE);
    }

    #[tokio::test]
    async fn test_grouped_precipitation() {
        let response = get(test_app(sample_measurements()), "/api/v1/precipitation").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["2012-07-12"], serde_json::json!([0.5, 0.7]));
        assert_eq!(json["2012-12-30"], serde_json::json!([null]));
    }

    #[tokio::test]
    async fn test_daily_precipitation() {
        let response = get(test_app(sample_measurements()), "/api/v1/daily_prcp").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(
            json,
            serde_json::json!([
                "2012-07-12", 0.5,
                "2012-07-12", 0.7,
                "2012-12-30", null
            ])
        );
    }

    #[tokio::test]
    async fn test_stations() {
        let response = get(test_app(sample_measurements()), "/api/v1/stations").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json[0]["station"], REFERENCE);
        assert_eq!(json[0]["name"], "WAIHEE 837.5, HI US");
    }

    #[tokio::test]
    async fn test_tobs() {
        let response = get(test_app(sample_measurements()), "/api/v1/tobs").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["2012-12-30"], 65);
        assert_eq!(json["2012-07-12"], 71);
    }

    #[tokio::test]
    async fn test_tobs_empty_dataset() {
        let response = get(test_app(vec![]), "/api/v1/tobs").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "EMPTY_DATASET");
    }

    #[tokio::test]
    async fn test_aggregates_from_start() {
        let response = get(test_app(sample_measurements()), "/api/v1/2012-07-12").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["date"], "2012-07-12");
        assert_eq!(rows[0]["min"], 68);
        assert_eq!(rows[0]["max"], 71);
    }

    #[tokio::test]
    async fn test_aggregates_range() {
        let response = get(
            test_app(sample_measurements()),
            "/api/v1/2012-07-12/2012-12-30",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_aggregates_invalid_date() {
        let response = get(test_app(sample_measurements()), "/api/v1/2012-7-12").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "INVALID_DATE");
    }

    #[tokio::test]
    async fn test_aggregates_date_not_recorded() {
        let response = get(test_app(sample_measurements()), "/api/v1/2012-07-13").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "DATE_NOT_FOUND");
    }
}
