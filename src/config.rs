//! Configuration resolution for the lavalink-health binary.
//!
//! Picks the configuration file (CLI path, then default locations), loads it
//! through the library and prints it on request.

use crate::cli::{Args, ConfigFormat};
use anyhow::{Context, Result};
use lavalink_health::HealthConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Locations searched when no `--config` is given.
pub const DEFAULT_CONFIG_PATHS: [&str; 4] = [
    "./lavalink-health.yaml",
    "./lavalink-health.yml",
    "./lavalink-health.json",
    "/etc/lavalink-health/config.yaml",
];

/// Returns the configuration file to load, if any.
pub fn config_path(args: &Args) -> Option<PathBuf> {
    if args.no_config {
        return None;
    }
    if let Some(path) = &args.config {
        return Some(path.clone());
    }
    DEFAULT_CONFIG_PATHS
        .iter()
        .map(Path::new)
        .find(|p| p.exists())
        .map(PathBuf::from)
}

/// Resolves configuration: `--no-config` > `--config` > default locations > built-in defaults.
pub fn resolve_config(args: &Args) -> Result<HealthConfig> {
    match config_path(args) {
        Some(path) => HealthConfig::load(&path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => {
            debug!("No configuration file found, using built-in defaults");
            Ok(HealthConfig::default())
        }
    }
}

/// Serializes a configuration in the requested format.
pub fn render_config(config: &HealthConfig, format: &ConfigFormat) -> Result<String> {
    let output = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    };
    Ok(output)
}

/// Shows configuration in requested format
pub fn show_config(config: &HealthConfig, format: &ConfigFormat) -> Result<()> {
    println!("{}", render_config(config, format)?);
    Ok(())
}
