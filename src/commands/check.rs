//! Check command implementation.
//!
//! Validates the effective configuration.

use anyhow::Result;
use lavalink_health::{HealthConfig, HealthStatus, MetricType};

/// Validates the configuration and prints a summary.
///
/// Returns `Ok(false)` when validation fails so the caller can pick the exit code.
pub fn command_check(config: &HealthConfig) -> Result<bool> {
    println!("🔍 Lavalink Health - Configuration Check");
    println!("========================================");

    println!("\n📊 Thresholds:");
    for metric in [
        MetricType::Cpu,
        MetricType::Ram,
        MetricType::Disk,
        MetricType::Ping,
        MetricType::Players,
    ] {
        let pair = config.thresholds.get(metric);
        println!(
            "   ├─ {:<8} good < {} <= moderate < {} <= critical",
            metric, pair.good, pair.moderate
        );
    }

    println!("\n🎨 Emojis:");
    for status in HealthStatus::ALL {
        println!("   ├─ {:<8} {}", status, config.emojis.get(status));
    }

    println!("\n📋 Summary:");
    match config.validate() {
        Ok(()) => {
            println!("   ✅ Configuration is valid");
            Ok(true)
        }
        Err(e) => {
            println!("   ❌ Configuration invalid: {}", e);
            Ok(false)
        }
    }
}
