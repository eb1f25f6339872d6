//! Human-readable formatting helpers.
//!
//! Uptime, byte sizes, timestamps, percentages and bounded-length strings,
//! rendered the way the status embeds display them.

use crate::error::{HealthError, Result};
use chrono::{DateTime, Local, NaiveDateTime, Utc};
use std::time::Duration;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_DAY: u64 = 86400;

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

/// Length used by [`truncate_default`].
pub const DEFAULT_TRUNCATE_LENGTH: usize = 100;
const ELLIPSIS: &str = "...";

/// Layout of [`format_timestamp`] output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats an uptime given in seconds, e.g. `"45s"`, `"2m 5s"`, `"1h 2m"`
/// or `"1d 1h"`.
///
/// Fractions are truncated. Negative and NaN inputs render as `"0s"`.
pub fn format_uptime(seconds: f64) -> String {
    let secs = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };

    if secs < SECS_PER_MINUTE {
        format!("{}s", secs)
    } else if secs < SECS_PER_HOUR {
        format!("{}m {}s", secs / SECS_PER_MINUTE, secs % SECS_PER_MINUTE)
    } else if secs < SECS_PER_DAY {
        format!(
            "{}h {}m",
            secs / SECS_PER_HOUR,
            (secs % SECS_PER_HOUR) / SECS_PER_MINUTE
        )
    } else {
        format!(
            "{}d {}h",
            secs / SECS_PER_DAY,
            (secs % SECS_PER_DAY) / SECS_PER_HOUR
        )
    }
}

/// [`format_uptime`] for a [`Duration`].
pub fn format_duration(duration: Duration) -> String {
    format_uptime(duration.as_secs_f64())
}

/// Formats a byte count with a binary unit: `"512B"`, `"2.0KB"`, `"1.0MB"`,
/// `"3.5GB"`.
///
/// Takes whole bytes only; fractional counts are not accepted and callers
/// must round first.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < KIB {
        format!("{}B", bytes)
    } else if bytes < MIB {
        format!("{:.1}KB", bytes as f64 / KIB as f64)
    } else if bytes < GIB {
        format!("{:.1}MB", bytes as f64 / MIB as f64)
    } else {
        format!("{:.1}GB", bytes as f64 / GIB as f64)
    }
}

/// Shortens `text` to at most `max_length` characters.
///
/// Truncated output ends in `"..."` and is exactly `max_length` characters
/// long. When `max_length` is below 3 the text is cut without an ellipsis.
pub fn truncate_string(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let ellipsis_len = ELLIPSIS.chars().count();
    if max_length < ellipsis_len {
        return text.chars().take(max_length).collect();
    }

    let mut truncated: String = text.chars().take(max_length - ellipsis_len).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// [`truncate_string`] at [`DEFAULT_TRUNCATE_LENGTH`].
pub fn truncate_default(text: &str) -> String {
    truncate_string(text, DEFAULT_TRUNCATE_LENGTH)
}

/// `value` as a percentage of `total`; zero when `total` is zero.
pub fn calculate_percentage(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    (value / total) * 100.0
}

/// A point in time accepted by [`format_timestamp`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Timestamp {
    /// Seconds since the Unix epoch.
    Epoch(f64),
    Local(DateTime<Local>),
    /// Wall-clock time already expressed in local time.
    Naive(NaiveDateTime),
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Timestamp::Epoch(secs as f64)
    }
}

impl From<f64> for Timestamp {
    fn from(secs: f64) -> Self {
        Timestamp::Epoch(secs)
    }
}

impl From<DateTime<Local>> for Timestamp {
    fn from(dt: DateTime<Local>) -> Self {
        Timestamp::Local(dt)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp::Local(dt.with_timezone(&Local))
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(dt: NaiveDateTime) -> Self {
        Timestamp::Naive(dt)
    }
}

/// Converts epoch seconds to local time.
fn epoch_to_local(secs: f64) -> Result<DateTime<Local>> {
    if !secs.is_finite() || secs < i64::MIN as f64 || secs >= i64::MAX as f64 {
        return Err(HealthError::TimestampOutOfRange(secs));
    }

    let whole = secs.floor();
    let nanos = (((secs - whole) * 1e9) as u32).min(999_999_999);

    DateTime::<Utc>::from_timestamp(whole as i64, nanos)
        .map(|utc| utc.with_timezone(&Local))
        .ok_or(HealthError::TimestampOutOfRange(secs))
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS` in the local time zone.
pub fn format_timestamp(timestamp: impl Into<Timestamp>) -> Result<String> {
    let formatted = match timestamp.into() {
        Timestamp::Epoch(secs) => epoch_to_local(secs)?.format(TIMESTAMP_FORMAT).to_string(),
        Timestamp::Local(dt) => dt.format(TIMESTAMP_FORMAT).to_string(),
        Timestamp::Naive(dt) => dt.format(TIMESTAMP_FORMAT).to_string(),
    };
    Ok(formatted)
}
