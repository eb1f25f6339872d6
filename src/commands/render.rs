//! Render command implementation.
//!
//! Turns a JSON status snapshot into the text a status message would show.

use anyhow::{Context, Result};
use lavalink_health::{
    calculate_percentage, format_bytes, format_timestamp, format_uptime, get_status_color,
    truncate_string, HealthFormatter, MetricType, NodeRecord, StatusSnapshot, SystemRecord,
};
use std::fmt::Write as FmtWrite;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::info;

const MILLIS_PER_SECOND: f64 = 1000.0;

/// Reads a snapshot from `input` ("-" is stdin) and prints the report.
pub fn command_render(input: &Path, max_name: usize, formatter: &HealthFormatter) -> Result<()> {
    let raw = if input.to_string_lossy() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading snapshot from stdin")?;
        buf
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("reading snapshot {}", input.display()))?
    };

    let snapshot: StatusSnapshot =
        serde_json::from_str(&raw).context("parsing snapshot JSON")?;
    info!(
        nodes = snapshot.nodes.len(),
        has_system = snapshot.system.is_some(),
        "Rendering snapshot"
    );

    print!("{}", render_report(formatter, &snapshot, max_name)?);
    Ok(())
}

/// Builds the full report text.
pub fn render_report(
    formatter: &HealthFormatter,
    snapshot: &StatusSnapshot,
    max_name: usize,
) -> Result<String> {
    let mut out = String::new();

    let overall = formatter.get_overall_health(&snapshot.nodes, snapshot.system.as_ref());
    writeln!(
        out,
        "Overall: {} {} (#{:06x})",
        formatter.emoji_for(overall),
        overall,
        get_status_color(overall.as_str())
    )?;
    if let Some(taken_at) = snapshot.taken_at {
        writeln!(out, "Taken at: {}", format_timestamp(taken_at)?)?;
    }

    writeln!(out, "\nNodes")?;
    if snapshot.nodes.is_empty() {
        writeln!(out, "(none)")?;
    }
    for node in &snapshot.nodes {
        writeln!(out, "{}", render_node(formatter, node, max_name)?)?;
    }

    if let Some(system) = &snapshot.system {
        writeln!(out, "\nSystem")?;
        writeln!(out, "{}", render_system(formatter, system)?)?;
    }

    if let Some(uptime) = snapshot.bot_uptime {
        writeln!(out, "\nBot uptime: {}", format_uptime(uptime))?;
    }

    Ok(out)
}

fn render_node(formatter: &HealthFormatter, node: &NodeRecord, max_name: usize) -> Result<String> {
    let name = truncate_string(&node.name, max_name);
    if !node.online {
        let offline = formatter.get_health_emoji(None, MetricType::Cpu);
        return Ok(format!("{} {} | offline", offline, name));
    }

    let node_status = formatter.get_overall_health(std::slice::from_ref(node), None);
    let Some(stats) = &node.stats else {
        return Ok(format!("{} {} | no stats", formatter.emoji_for(node_status), name));
    };

    let cpu = stats.cpu * 100.0;
    let ram = calculate_percentage(stats.memory.used as f64, stats.memory.allocated as f64);
    let mut line = format!(
        "{} {} | CPU {} {:.1}% | RAM {} {:.1}% ({} / {})",
        formatter.emoji_for(node_status),
        name,
        formatter.get_health_emoji(Some(cpu), MetricType::Cpu),
        cpu,
        formatter.get_health_emoji(node.ram_percent(), MetricType::Ram),
        ram,
        format_bytes(stats.memory.used),
        format_bytes(stats.memory.allocated),
    );

    let ping_emoji = formatter.get_health_emoji(node.ping.reading(), MetricType::Ping);
    match node.ping.millis() {
        Some(ping) => write!(line, " | Ping {} {:.0}ms", ping_emoji, ping)?,
        None => write!(line, " | Ping {} n/a", ping_emoji)?,
    }

    if let Some(players) = stats.players {
        write!(
            line,
            " | Players {} {}",
            formatter.get_health_emoji(Some(players as f64), MetricType::Players),
            players
        )?;
    }
    if let Some(uptime_ms) = stats.uptime {
        write!(line, " | Up {}", format_uptime(uptime_ms as f64 / MILLIS_PER_SECOND))?;
    }

    Ok(line)
}

fn render_system(formatter: &HealthFormatter, system: &SystemRecord) -> Result<String> {
    let mut line = format!(
        "CPU {} {:.1}% | RAM {} {:.1}% | Disk {} {:.1}%",
        formatter.get_health_emoji(Some(system.cpu_percent), MetricType::Cpu),
        system.cpu_percent,
        formatter.get_health_emoji(Some(system.memory_percent), MetricType::Ram),
        system.memory_percent,
        formatter.get_health_emoji(Some(system.disk_percent), MetricType::Disk),
        system.disk_percent,
    );

    if let Some(load) = system.load_avg {
        let cores = system.cpu_count.unwrap_or(0);
        write!(
            line,
            " | Load {} {:.2} ({} cores)",
            formatter.get_load_indicator(load, cores),
            load,
            cores
        )?;
    }

    Ok(line)
}
