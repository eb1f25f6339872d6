//! Lavalink Health Library
//!
//! This library renders health and status information for a Discord status
//! bot: CPU, RAM, disk and ping classification, and human-readable uptime,
//! byte size and timestamp strings. Every helper is a pure function of its
//! input and the injected lookup tables.
//!
//! # Features
//!
//! - **Threshold Classification**: Map measurements to good/moderate/critical bands
//! - **Overall Health**: Weighted-ratio verdict across nodes and the host system
//! - **Configurable Tables**: Thresholds and emojis loaded from YAML, JSON or TOML
//! - **Formatting Helpers**: Uptime, byte sizes, timestamps, percentages, truncation
//!
//! # Usage
//!
//! ```rust
//! use lavalink_health::{format_bytes, format_uptime, get_status_color, HealthConfig, HealthFormatter};
//!
//! let formatter = HealthFormatter::new(HealthConfig::default());
//! let overall = formatter.get_overall_health(&[], None);
//!
//! println!("Overall status: {} (#{:06x})", overall, get_status_color(overall.as_str()));
//! println!("Uptime: {}", format_uptime(3725.0));
//! println!("Heap: {}", format_bytes(512 * 1024 * 1024));
//! ```

pub mod error;
pub mod format;
pub mod health;
pub mod health_config;
pub mod records;

// Re-export main types for convenience
pub use error::{HealthError, Result};
pub use format::{
    calculate_percentage, format_bytes, format_duration, format_timestamp, format_uptime,
    truncate_default, truncate_string, Timestamp, DEFAULT_TRUNCATE_LENGTH,
};
pub use health::{
    get_status_color, HealthFormatter, HealthStatus, HealthTally, MetricType, DEFAULT_PING_MS,
    LOAD_THRESHOLDS,
};
pub use health_config::{EmojiSet, HealthConfig, HealthThresholds, ThresholdPair};
pub use records::{MemoryStats, NodeRecord, NodeStats, Ping, StatusSnapshot, SystemRecord};
