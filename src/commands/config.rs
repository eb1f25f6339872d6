//! Config command implementation.
//!
//! Generates configuration files in various formats.

use anyhow::Result;
use lavalink_health::HealthConfig;
use std::fs;
use std::path::PathBuf;

use crate::cli::ConfigFormat;
use crate::config::render_config;

/// Generates configuration files.
pub fn command_config(
    output: Option<PathBuf>,
    format: ConfigFormat,
    commented: bool,
) -> Result<()> {
    let config = HealthConfig::default();
    let output = output.unwrap_or_else(|| PathBuf::from("lavalink-health.yaml"));

    let mut content = render_config(&config, &format)?;
    if commented && matches!(format, ConfigFormat::Yaml) {
        content = add_config_comments(content);
    }

    if output.to_string_lossy() == "-" {
        print!("{}", content);
    } else {
        fs::write(&output, content)?;
        println!("✅ Configuration written to: {}", output.display());
    }

    Ok(())
}

/// Adds comments to YAML configuration.
fn add_config_comments(yaml: String) -> String {
    let comments = r#"# Lavalink Health Configuration
# =============================
#
# Thresholds
# ----------
# Each metric has two exclusive upper bounds:
#   value <  good                -> good
#   good <= value < moderate     -> moderate
#   value >= moderate            -> critical
# Metrics: cpu, ram, disk (percent), ping (ms), players (count).
# Metrics left out keep their built-in values; unknown metrics use 50/80.
#
# Emojis
# ------
# good, moderate, critical, offline: glyph shown for each status.
"#;

    format!("{comments}\n{yaml}")
}
