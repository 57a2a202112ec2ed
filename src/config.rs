//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.
//!
//! The reference station and lookback length for rolling-window queries are
//! configuration, not business logic: they ship with defaults matching the
//! bundled dataset but can be pointed at any station.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// Path to the SQLite dataset file
    #[serde(default = "default_dataset_path")]
    pub path: String,

    /// Station code used for rolling-window observation queries
    #[serde(default = "default_reference_station")]
    pub reference_station: String,

    /// Length of the rolling window in calendar days
    #[serde(default = "default_lookback_days")]
    pub lookback_days: i64,
}

fn default_dataset_path() -> String {
    "./climate.sqlite".to_string()
}

fn default_reference_station() -> String {
    "USC00519281".to_string()
}

fn default_lookback_days() -> i64 {
    365
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            reference_station: default_reference_station(),
            lookback_days: default_lookback_days(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8086
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("climata").join("config.toml")),
            Some(PathBuf::from("/etc/climata/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Dataset overrides
        if let Ok(path) = std::env::var("CLIMATA_DATASET_PATH") {
            self.dataset.path = path;
        }
        if let Ok(station) = std::env::var("CLIMATA_REFERENCE_STATION") {
            self.dataset.reference_station = station;
        }
        if let Ok(days) = std::env::var("CLIMATA_LOOKBACK_DAYS") {
            if let Ok(d) = days.parse() {
                self.dataset.lookback_days = d;
            }
        }

        // API overrides
        if let Ok(host) = std::env::var("CLIMATA_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("CLIMATA_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("CLIMATA_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("CLIMATA_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Climata Configuration
#
# Environment variables override these settings:
# - CLIMATA_DATASET_PATH
# - CLIMATA_REFERENCE_STATION
# - CLIMATA_LOOKBACK_DAYS
# - CLIMATA_API_HOST
# - CLIMATA_API_PORT
# - CLIMATA_LOG_LEVEL
# - CLIMATA_LOG_FORMAT

[dataset]
# Path to the SQLite dataset file (loaded once, read-only)
path = "./climate.sqlite"

# Station code used for rolling-window observation queries
reference_station = "USC00519281"

# Length of the rolling window in calendar days
lookback_days = 365

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8086

# Request timeout in seconds
request_timeout_secs = 30

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/climata/climata.log"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dataset.reference_station, "USC00519281");
        assert_eq!(config.dataset.lookback_days, 365);
        assert_eq!(config.api.port, 8086);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [dataset]
            path = "/data/climate.sqlite"
            reference_station = "USC00519397"

            [api]
            port = 9000
            "#,
        )
        .unwrap();

        assert_eq!(config.dataset.path, "/data/climate.sqlite");
        assert_eq!(config.dataset.reference_station, "USC00519397");
        assert_eq!(config.dataset.lookback_days, 365);
        assert_eq!(config.api.port, 9000);
        assert_eq!(config.api.host, "0.0.0.0");
    }

    #[test]
    fn test_generated_default_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.dataset.reference_station, "USC00519281");
    }
}
