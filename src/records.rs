//! Input records produced by the monitoring collectors.
//!
//! These mirror the JSON the status bot receives from Lavalink nodes and
//! from the host system collector. Unknown fields are ignored.

use crate::health::DEFAULT_PING_MS;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Memory figures reported by a node, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    #[serde(default)]
    pub used: u64,
    #[serde(default)]
    pub allocated: u64,
}

/// Resource statistics of one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeStats {
    /// CPU load as a fraction (0.0 to 1.0).
    #[serde(default)]
    pub cpu: f64,
    #[serde(default)]
    pub memory: MemoryStats,
    /// Connected players, when the node reports them.
    #[serde(default)]
    pub players: Option<u64>,
    /// Node uptime in milliseconds.
    #[serde(default)]
    pub uptime: Option<u64>,
}

/// A monitored Lavalink node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub online: bool,
    #[serde(default)]
    pub stats: Option<NodeStats>,
    /// Round-trip time in milliseconds.
    #[serde(default, skip_serializing_if = "Ping::is_missing")]
    pub ping: Ping,
}

/// A node's ping as it appeared in the record.
///
/// A missing key and an explicit `null` are classified differently: a
/// missing ping is assumed to be [`DEFAULT_PING_MS`], a `null` ping is
/// treated as offline.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Ping {
    #[default]
    Missing,
    Null,
    Millis(f64),
}

impl Ping {
    /// `true` when the key was absent from the record.
    pub fn is_missing(&self) -> bool {
        matches!(self, Ping::Missing)
    }

    /// Reported round-trip time, if any.
    pub fn millis(&self) -> Option<f64> {
        match self {
            Ping::Millis(ms) => Some(*ms),
            Ping::Missing | Ping::Null => None,
        }
    }

    /// Value to classify: the default for a missing key, `None` for `null`.
    pub fn reading(&self) -> Option<f64> {
        match self {
            Ping::Missing => Some(DEFAULT_PING_MS),
            Ping::Null => None,
            Ping::Millis(ms) => Some(*ms),
        }
    }
}

impl From<f64> for Ping {
    fn from(ms: f64) -> Self {
        Ping::Millis(ms)
    }
}

impl Serialize for Ping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Ping::Millis(ms) => serializer.serialize_f64(*ms),
            Ping::Missing | Ping::Null => serializer.serialize_none(),
        }
    }
}

// Only called when the key is present; an absent key goes through `Default`.
impl<'de> Deserialize<'de> for Ping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<f64>::deserialize(deserializer)? {
            Some(ms) => Ping::Millis(ms),
            None => Ping::Null,
        })
    }
}

impl NodeRecord {
    /// CPU load scaled to a percentage.
    pub fn cpu_percent(&self) -> Option<f64> {
        self.stats.as_ref().map(|s| s.cpu * 100.0)
    }

    /// Used memory as a percentage of allocated memory. `None` when the
    /// node has no stats or reports zero allocated memory.
    pub fn ram_percent(&self) -> Option<f64> {
        let memory = self.stats.as_ref()?.memory;
        if memory.allocated == 0 {
            return None;
        }
        Some(memory.used as f64 / memory.allocated as f64 * 100.0)
    }
}

/// Host system usage, all values in percent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemRecord {
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub disk_percent: f64,
    #[serde(default)]
    pub load_avg: Option<f64>,
    #[serde(default)]
    pub cpu_count: Option<usize>,
}

impl SystemRecord {
    pub fn new(cpu_percent: f64, memory_percent: f64, disk_percent: f64) -> Self {
        Self {
            cpu_percent,
            memory_percent,
            disk_percent,
            load_avg: None,
            cpu_count: None,
        }
    }
}

/// One rendering input: every node plus the optional host record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub system: Option<SystemRecord>,
    /// Bot process uptime in seconds.
    #[serde(default)]
    pub bot_uptime: Option<f64>,
    /// Unix time the snapshot was taken, in seconds.
    #[serde(default)]
    pub taken_at: Option<i64>,
}
