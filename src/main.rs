//! Climata API Server
//!
//! Run with: cargo run -- --dataset ./climate.sqlite
//!
//! # Configuration
//!
//! Loaded from a TOML file (see `--config`) with environment overrides:
//! - `CLIMATA_DATASET_PATH`: Path to the SQLite dataset
//! - `CLIMATA_REFERENCE_STATION`: Station code for rolling-window queries
//! - `CLIMATA_LOOKBACK_DAYS`: Rolling window length in days
//! - `CLIMATA_API_HOST` / `CLIMATA_API_PORT`: Listen address
//! - `RUST_LOG`: Log filter (default: climata=info)

use clap::Parser;
use climata::api::{serve, ApiConfig, AppState};
use climata::config::Config;
use climata::query::QueryEngine;
use climata::store::RecordStore;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "climata")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Read-only query service over a historical climate dataset")]
struct Args {
    /// Path to a TOML config file (default: standard locations)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the SQLite dataset (overrides config)
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Print a sample config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_config {
        print!("{}", climata::config::generate_default_config());
        return Ok(());
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "climata=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Climata API server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(dataset) = &args.dataset {
        config.dataset.path = dataset.to_string_lossy().to_string();
    }
    if let Some(host) = args.host {
        config.api.host = host;
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }

    tracing::info!("Dataset: {}", config.dataset.path);
    tracing::info!("Reference station: {}", config.dataset.reference_station);

    // Load the dataset once; everything after this point is read-only
    let store = Arc::new(RecordStore::open(Path::new(&config.dataset.path))?);
    if store.is_empty() {
        tracing::warn!("Dataset contains no measurements; window queries will fail");
    }

    let engine = Arc::new(QueryEngine::new(
        Arc::clone(&store),
        config.dataset.reference_station.clone(),
        config.dataset.lookback_days,
    ));

    let api_config = ApiConfig {
        host: config.api.host.clone(),
        port: config.api.port,
        request_timeout_ms: config.api.request_timeout_secs * 1000,
    };

    let state = AppState::new(store, engine, api_config.clone());

    // Run server
    tracing::info!("Starting server on {}", api_config.addr());
    serve(state, &api_config).await?;

    tracing::info!("Climata API server stopped");
    Ok(())
}
