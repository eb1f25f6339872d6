//! Configuration types for health classification.
//!
//! This module provides the two lookup tables the classifiers read: the
//! per-metric threshold pairs and the emoji set used to render each status.
//! Both are plain data owned by [`HealthConfig`] and injected into a
//! [`HealthFormatter`](crate::HealthFormatter).

use crate::error::{HealthError, Result};
use crate::health::{HealthStatus, MetricType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Upper bound of the "good" band used when a metric has no entry.
pub const DEFAULT_GOOD_THRESHOLD: f64 = 50.0;
/// Upper bound of the "moderate" band used when a metric has no entry.
pub const DEFAULT_MODERATE_THRESHOLD: f64 = 80.0;

fn default_good() -> f64 {
    DEFAULT_GOOD_THRESHOLD
}
fn default_moderate() -> f64 {
    DEFAULT_MODERATE_THRESHOLD
}

/// Boundaries separating the severity bands of one metric.
///
/// Both bounds are exclusive upper limits:
/// - `value < good` is good
/// - `good <= value < moderate` is moderate
/// - anything else (including NaN) is critical
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPair {
    #[serde(default = "default_good")]
    pub good: f64,
    #[serde(default = "default_moderate")]
    pub moderate: f64,
}

impl ThresholdPair {
    /// Builds a pair from its two band bounds.
    pub const fn new(good: f64, moderate: f64) -> Self {
        Self { good, moderate }
    }

    /// Places `value` into one of the three severity bands.
    pub fn classify(&self, value: f64) -> HealthStatus {
        if value < self.good {
            HealthStatus::Good
        } else if value < self.moderate {
            HealthStatus::Moderate
        } else {
            HealthStatus::Critical
        }
    }
}

impl Default for ThresholdPair {
    fn default() -> Self {
        Self::new(DEFAULT_GOOD_THRESHOLD, DEFAULT_MODERATE_THRESHOLD)
    }
}

/// Threshold pairs keyed by metric name.
///
/// Entries read from a file are merged over the built-in defaults, so a
/// file only needs to list the metrics it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, ThresholdPair>",
    into = "BTreeMap<String, ThresholdPair>"
)]
pub struct HealthThresholds {
    entries: BTreeMap<String, ThresholdPair>,
}

impl HealthThresholds {
    /// A table with no entries; every lookup yields the fallback pair.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Returns the pair for `metric`, or the `{50, 80}` fallback.
    pub fn get(&self, metric: MetricType) -> ThresholdPair {
        self.get_by_name(metric.as_str())
    }

    /// Name-based lookup; unknown names yield the fallback pair.
    pub fn get_by_name(&self, name: &str) -> ThresholdPair {
        self.entries.get(name).copied().unwrap_or_default()
    }

    /// Inserts or replaces the pair for `metric`.
    pub fn set(&mut self, metric: MetricType, pair: ThresholdPair) {
        self.entries.insert(metric.as_str().to_string(), pair);
    }

    /// Removes the entry for `metric`, so lookups fall back to `{50, 80}`.
    pub fn remove(&mut self, metric: MetricType) -> Option<ThresholdPair> {
        self.entries.remove(metric.as_str())
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ThresholdPair)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Default for HealthThresholds {
    fn default() -> Self {
        let mut thresholds = Self::empty();
        thresholds.set(MetricType::Cpu, ThresholdPair::new(50.0, 80.0));
        thresholds.set(MetricType::Ram, ThresholdPair::new(70.0, 90.0));
        thresholds.set(MetricType::Disk, ThresholdPair::new(80.0, 95.0));
        thresholds.set(MetricType::Ping, ThresholdPair::new(100.0, 300.0));
        thresholds.set(MetricType::Players, ThresholdPair::new(50.0, 100.0));
        thresholds
    }
}

impl From<BTreeMap<String, ThresholdPair>> for HealthThresholds {
    fn from(overrides: BTreeMap<String, ThresholdPair>) -> Self {
        let mut thresholds = Self::default();
        thresholds.entries.extend(overrides);
        thresholds
    }
}

impl From<HealthThresholds> for BTreeMap<String, ThresholdPair> {
    fn from(thresholds: HealthThresholds) -> Self {
        thresholds.entries
    }
}

/// Display glyphs for each health status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmojiSet {
    pub good: String,
    pub moderate: String,
    pub critical: String,
    pub offline: String,
}

impl EmojiSet {
    /// Glyph configured for `status`.
    pub fn get(&self, status: HealthStatus) -> &str {
        match status {
            HealthStatus::Good => &self.good,
            HealthStatus::Moderate => &self.moderate,
            HealthStatus::Critical => &self.critical,
            HealthStatus::Offline => &self.offline,
        }
    }
}

impl Default for EmojiSet {
    fn default() -> Self {
        Self {
            good: "🟢".to_string(),
            moderate: "🟡".to_string(),
            critical: "🔴".to_string(),
            offline: "⚫".to_string(),
        }
    }
}

/// Both lookup tables, as injected into a formatter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthConfig {
    #[serde(default)]
    pub thresholds: HealthThresholds,
    #[serde(default)]
    pub emojis: EmojiSet,
}

impl HealthConfig {
    /// Loads a configuration file. JSON and TOML are picked by extension,
    /// anything else is parsed as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let config: HealthConfig = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => serde_yaml::from_str(&content)?,
        };
        info!("Loaded health configuration from: {}", path.display());
        Ok(config)
    }

    /// Rejects threshold pairs that cannot describe three ordered bands and
    /// empty emoji strings.
    pub fn validate(&self) -> Result<()> {
        for (name, pair) in self.thresholds.iter() {
            if !pair.good.is_finite() || !pair.moderate.is_finite() {
                return Err(HealthError::InvalidConfig(format!(
                    "thresholds for '{}' must be finite numbers",
                    name
                )));
            }
            if pair.good < 0.0 || pair.moderate < 0.0 {
                return Err(HealthError::InvalidConfig(format!(
                    "thresholds for '{}' must not be negative",
                    name
                )));
            }
            if pair.good > pair.moderate {
                return Err(HealthError::InvalidConfig(format!(
                    "thresholds for '{}': good ({}) is above moderate ({})",
                    name, pair.good, pair.moderate
                )));
            }
            if MetricType::parse(name).is_none() {
                warn!("Thresholds configured for unknown metric type '{}'", name);
            }
        }

        for status in HealthStatus::ALL {
            if self.emojis.get(status).is_empty() {
                return Err(HealthError::InvalidConfig(format!(
                    "emoji for '{}' must not be empty",
                    status
                )));
            }
        }

        Ok(())
    }
}
