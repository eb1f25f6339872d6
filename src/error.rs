//! Error types for the health library.
//!
//! Classification and formatting helpers never fail; they fall back to
//! defaults instead. Errors only come from timestamp conversion and from
//! loading or validating a configuration file.

use thiserror::Error;

/// Errors returned by the library.
#[derive(Debug, Error)]
pub enum HealthError {
    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(f64),

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, HealthError>;
