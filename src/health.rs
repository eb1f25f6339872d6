//! Health classification for Lavalink nodes and the host system.
//!
//! Every check maps a single measurement onto a [`HealthStatus`] through the
//! metric's [`ThresholdPair`]. The aggregator then turns the
//! individual results into one overall verdict.
//!
//! # Usage
//!
//! ```rust
//! use lavalink_health::{HealthConfig, HealthFormatter, HealthStatus, MetricType, SystemRecord};
//!
//! let formatter = HealthFormatter::new(HealthConfig::default());
//!
//! assert_eq!(formatter.get_health_emoji(Some(12.0), MetricType::Cpu), "🟢");
//! assert_eq!(formatter.get_health_emoji(None, MetricType::Cpu), "⚫");
//!
//! let system = SystemRecord::new(10.0, 20.0, 30.0);
//! let overall = formatter.get_overall_health(&[], Some(&system));
//! assert_eq!(overall, HealthStatus::Good);
//! ```

use crate::health_config::{HealthConfig, ThresholdPair};
use crate::records::{NodeRecord, SystemRecord};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Ping assumed for an online node that did not report one, in milliseconds.
pub const DEFAULT_PING_MS: f64 = 999.0;

/// Load-per-core bands for [`HealthFormatter::get_load_indicator`].
pub const LOAD_THRESHOLDS: ThresholdPair = ThresholdPair::new(70.0, 90.0);

/// Above this share of critical checks the overall verdict is critical.
const CRITICAL_RATIO_LIMIT: f64 = 0.3;
/// Above this share of critical checks the overall verdict is at least moderate.
const CRITICAL_RATIO_WARN: f64 = 0.1;
/// Above this share of moderate checks the overall verdict is at least moderate.
const MODERATE_RATIO_WARN: f64 = 0.5;

/// Coarse severity of a metric or of an aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Good,
    Moderate,
    Critical,
    Offline,
}

impl HealthStatus {
    pub const ALL: [HealthStatus; 4] = [
        HealthStatus::Good,
        HealthStatus::Moderate,
        HealthStatus::Critical,
        HealthStatus::Offline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Good => "good",
            HealthStatus::Moderate => "moderate",
            HealthStatus::Critical => "critical",
            HealthStatus::Offline => "offline",
        }
    }

    /// Parses a lowercase status label. Unknown labels yield `None`.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "good" => Some(HealthStatus::Good),
            "moderate" => Some(HealthStatus::Moderate),
            "critical" => Some(HealthStatus::Critical),
            "offline" => Some(HealthStatus::Offline),
            _ => None,
        }
    }

    /// Discord embed color (24-bit RGB) for this status.
    pub fn color(&self) -> u32 {
        match self {
            HealthStatus::Good => 0x00ff00,
            HealthStatus::Moderate => 0xff8800,
            HealthStatus::Critical => 0xff0000,
            HealthStatus::Offline => 0x808080,
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Category of measurement, used to select a threshold pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    Cpu,
    Ram,
    Disk,
    Ping,
    Players,
}

impl MetricType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::Cpu => "cpu",
            MetricType::Ram => "ram",
            MetricType::Disk => "disk",
            MetricType::Ping => "ping",
            MetricType::Players => "players",
        }
    }

    /// Parses a lowercase metric name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "cpu" => Some(MetricType::Cpu),
            "ram" => Some(MetricType::Ram),
            "disk" => Some(MetricType::Disk),
            "ping" => Some(MetricType::Ping),
            "players" => Some(MetricType::Players),
            _ => None,
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returns the embed color for a status label; unknown labels get the
/// offline color.
pub fn get_status_color(status: &str) -> u32 {
    HealthStatus::parse(status)
        .unwrap_or(HealthStatus::Offline)
        .color()
}

/// Running count of check results feeding the overall verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HealthTally {
    pub critical: usize,
    pub moderate: usize,
    pub total: usize,
}

impl HealthTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one performed check.
    pub fn record(&mut self, status: HealthStatus) {
        match status {
            HealthStatus::Critical => self.critical += 1,
            HealthStatus::Moderate => self.moderate += 1,
            HealthStatus::Good | HealthStatus::Offline => {}
        }
        self.total += 1;
    }

    /// Weighted-ratio verdict. No checks at all is treated as critical.
    pub fn verdict(&self) -> HealthStatus {
        if self.total == 0 {
            return HealthStatus::Critical;
        }

        let total = self.total as f64;
        let critical_ratio = self.critical as f64 / total;
        let moderate_ratio = self.moderate as f64 / total;

        if critical_ratio > CRITICAL_RATIO_LIMIT {
            HealthStatus::Critical
        } else if critical_ratio > CRITICAL_RATIO_WARN || moderate_ratio > MODERATE_RATIO_WARN {
            HealthStatus::Moderate
        } else {
            HealthStatus::Good
        }
    }
}

/// Classifier bound to one set of threshold and emoji tables.
#[derive(Debug, Clone, Default)]
pub struct HealthFormatter {
    config: HealthConfig,
}

impl HealthFormatter {
    /// Creates a formatter reading the given tables.
    pub fn new(config: HealthConfig) -> Self {
        Self { config }
    }

    /// The injected tables.
    pub fn config(&self) -> &HealthConfig {
        &self.config
    }

    /// Status of a single measurement; `None` means the source is offline.
    pub fn health_status(&self, value: Option<f64>, metric: MetricType) -> HealthStatus {
        match value {
            None => HealthStatus::Offline,
            Some(v) => self.config.thresholds.get(metric).classify(v),
        }
    }

    /// Configured emoji for `status`.
    pub fn emoji_for(&self, status: HealthStatus) -> &str {
        self.config.emojis.get(status)
    }

    /// Emoji for a single measurement.
    pub fn get_health_emoji(&self, value: Option<f64>, metric: MetricType) -> &str {
        self.emoji_for(self.health_status(value, metric))
    }

    /// Runs the three checks of one online node. Offline nodes add nothing.
    fn tally_node(&self, node: &NodeRecord, tally: &mut HealthTally) {
        if !node.online {
            return;
        }

        let cpu = match node.cpu_percent() {
            Some(percent) => self.health_status(Some(percent), MetricType::Cpu),
            None => {
                warn!("Node '{}' is online but reported no stats", node.name);
                HealthStatus::Critical
            }
        };
        tally.record(cpu);

        let ram = match node.ram_percent() {
            Some(percent) => self.health_status(Some(percent), MetricType::Ram),
            None => {
                if node.stats.is_some() {
                    warn!(
                        "Node '{}' reported zero allocated memory, counting RAM as critical",
                        node.name
                    );
                }
                HealthStatus::Critical
            }
        };
        tally.record(ram);

        tally.record(self.health_status(node.ping.reading(), MetricType::Ping));
    }

    fn tally_system(&self, system: &SystemRecord, tally: &mut HealthTally) {
        tally.record(self.health_status(Some(system.cpu_percent), MetricType::Cpu));
        tally.record(self.health_status(Some(system.memory_percent), MetricType::Ram));
        tally.record(self.health_status(Some(system.disk_percent), MetricType::Disk));
    }

    /// Aggregates node and system checks into `good`, `moderate` or
    /// `critical`.
    pub fn get_overall_health(
        &self,
        nodes: &[NodeRecord],
        system: Option<&SystemRecord>,
    ) -> HealthStatus {
        let mut tally = HealthTally::new();

        for node in nodes {
            self.tally_node(node, &mut tally);
        }
        if let Some(system) = system {
            self.tally_system(system, &mut tally);
        }

        let verdict = tally.verdict();
        debug!(
            critical = tally.critical,
            moderate = tally.moderate,
            total = tally.total,
            "Overall health: {}",
            verdict
        );
        verdict
    }

    /// Status of the load average relative to the core count.
    pub fn load_status(&self, load_avg: f64, cpu_count: usize) -> HealthStatus {
        if cpu_count == 0 {
            return HealthStatus::Offline;
        }
        let load_percentage = load_avg / cpu_count as f64 * 100.0;
        LOAD_THRESHOLDS.classify(load_percentage)
    }

    /// Emoji for the load average relative to the core count.
    pub fn get_load_indicator(&self, load_avg: f64, cpu_count: usize) -> &str {
        self.emoji_for(self.load_status(load_avg, cpu_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{MemoryStats, NodeStats, Ping};

    fn formatter() -> HealthFormatter {
        HealthFormatter::new(HealthConfig::default())
    }

    fn tally_of(critical: usize, moderate: usize, total: usize) -> HealthTally {
        HealthTally {
            critical,
            moderate,
            total,
        }
    }

    #[test]
    fn test_status_roundtrip_labels() {
        for status in HealthStatus::ALL {
            assert_eq!(HealthStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(HealthStatus::parse("Good"), None);
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(get_status_color("good"), 0x00ff00);
        assert_eq!(get_status_color("moderate"), 0xff8800);
        assert_eq!(get_status_color("critical"), 0xff0000);
        assert_eq!(get_status_color("offline"), 0x808080);
        assert_eq!(get_status_color("unknown"), get_status_color("offline"));
    }

    #[test]
    fn test_tally_counts_every_check() {
        let mut tally = HealthTally::new();
        tally.record(HealthStatus::Good);
        tally.record(HealthStatus::Critical);
        tally.record(HealthStatus::Moderate);
        tally.record(HealthStatus::Offline);
        assert_eq!(tally, tally_of(1, 1, 4));
    }

    #[test]
    fn test_verdict_ratios() {
        assert_eq!(tally_of(0, 0, 0).verdict(), HealthStatus::Critical);
        assert_eq!(tally_of(4, 0, 10).verdict(), HealthStatus::Critical);
        assert_eq!(tally_of(0, 6, 10).verdict(), HealthStatus::Moderate);
        assert_eq!(tally_of(2, 0, 10).verdict(), HealthStatus::Moderate);
        assert_eq!(tally_of(0, 0, 10).verdict(), HealthStatus::Good);
        // Exactly at the limits does not escalate.
        assert_eq!(tally_of(1, 5, 10).verdict(), HealthStatus::Good);
        assert_eq!(tally_of(3, 0, 10).verdict(), HealthStatus::Moderate);
    }

    #[test]
    fn test_zero_allocated_counts_as_critical() {
        let node = NodeRecord {
            name: "eu-1".to_string(),
            online: true,
            stats: Some(NodeStats {
                cpu: 0.1,
                memory: MemoryStats {
                    used: 0,
                    allocated: 0,
                },
                players: None,
                uptime: None,
            }),
            ping: Ping::Millis(20.0),
        };
        let mut tally = HealthTally::new();
        formatter().tally_node(&node, &mut tally);
        assert_eq!(tally, tally_of(1, 0, 3));
    }

    #[test]
    fn test_null_ping_is_recorded_as_offline() {
        let node = NodeRecord {
            name: "eu-1".to_string(),
            online: true,
            stats: Some(NodeStats {
                cpu: 0.1,
                memory: MemoryStats {
                    used: 100,
                    allocated: 1000,
                },
                players: None,
                uptime: None,
            }),
            ping: Ping::Null,
        };
        let mut tally = HealthTally::new();
        formatter().tally_node(&node, &mut tally);
        assert_eq!(tally, tally_of(0, 0, 3));
    }

    #[test]
    fn test_load_status_bands() {
        let f = formatter();
        assert_eq!(f.load_status(1.0, 0), HealthStatus::Offline);
        assert_eq!(f.load_status(2.7, 4), HealthStatus::Good);
        assert_eq!(f.load_status(3.0, 4), HealthStatus::Moderate);
        assert_eq!(f.load_status(4.0, 4), HealthStatus::Critical);
    }
}
