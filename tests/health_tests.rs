//! Integration tests for the health module.
//!
//! These tests verify the behavior of `HealthFormatter` classification and
//! aggregation with various configurations and node states.

use lavalink_health::{
    get_status_color, HealthConfig, HealthFormatter, HealthStatus, HealthTally, HealthThresholds,
    MemoryStats, MetricType, NodeRecord, NodeStats, Ping, SystemRecord, ThresholdPair,
};

/// Helper function to create a formatter with the default tables.
fn default_formatter() -> HealthFormatter {
    HealthFormatter::new(HealthConfig::default())
}

/// Helper function to create an online node.
fn online_node(name: &str, cpu: f64, used: u64, allocated: u64, ping: Ping) -> NodeRecord {
    NodeRecord {
        name: name.to_string(),
        online: true,
        stats: Some(NodeStats {
            cpu,
            memory: MemoryStats { used, allocated },
            players: None,
            uptime: None,
        }),
        ping,
    }
}

fn tally(critical: usize, moderate: usize, good: usize) -> HealthTally {
    let mut tally = HealthTally::new();
    for _ in 0..critical {
        tally.record(HealthStatus::Critical);
    }
    for _ in 0..moderate {
        tally.record(HealthStatus::Moderate);
    }
    for _ in 0..good {
        tally.record(HealthStatus::Good);
    }
    tally
}

#[test]
fn test_emoji_bands_for_every_metric() {
    let formatter = default_formatter();
    let emojis = &formatter.config().emojis;

    for metric in [
        MetricType::Cpu,
        MetricType::Ram,
        MetricType::Disk,
        MetricType::Ping,
        MetricType::Players,
    ] {
        let pair = formatter.config().thresholds.get(metric);
        assert_eq!(
            formatter.get_health_emoji(Some(pair.good - 0.5), metric),
            emojis.good,
            "{} below good",
            metric
        );
        assert_eq!(
            formatter.get_health_emoji(Some(pair.good), metric),
            emojis.moderate,
            "{} at good",
            metric
        );
        assert_eq!(
            formatter.get_health_emoji(Some(pair.moderate), metric),
            emojis.critical,
            "{} at moderate",
            metric
        );
        assert_eq!(formatter.get_health_emoji(None, metric), emojis.offline);
    }
}

#[test]
fn test_missing_threshold_uses_fallback_pair() {
    let config = HealthConfig {
        thresholds: HealthThresholds::empty(),
        ..HealthConfig::default()
    };
    let formatter = HealthFormatter::new(config);

    assert_eq!(formatter.health_status(Some(49.0), MetricType::Disk), HealthStatus::Good);
    assert_eq!(formatter.health_status(Some(50.0), MetricType::Disk), HealthStatus::Moderate);
    assert_eq!(formatter.health_status(Some(80.0), MetricType::Disk), HealthStatus::Critical);
}

#[test]
fn test_custom_emojis_are_used() {
    let mut config = HealthConfig::default();
    config.emojis.good = "OK".to_string();
    config.emojis.critical = "BAD".to_string();
    let formatter = HealthFormatter::new(config);

    assert_eq!(formatter.get_health_emoji(Some(1.0), MetricType::Cpu), "OK");
    assert_eq!(formatter.get_health_emoji(Some(99.0), MetricType::Cpu), "BAD");
}

#[test]
fn test_no_data_is_critical() {
    assert_eq!(
        default_formatter().get_overall_health(&[], None),
        HealthStatus::Critical
    );
}

#[test]
fn test_only_offline_nodes_is_critical() {
    let nodes = vec![
        NodeRecord {
            name: "eu-1".to_string(),
            ..NodeRecord::default()
        },
        NodeRecord {
            name: "us-1".to_string(),
            online: false,
            ..online_node("us-1", 0.1, 10, 100, Ping::Millis(10.0))
        },
    ];
    assert_eq!(
        default_formatter().get_overall_health(&nodes, None),
        HealthStatus::Critical
    );
}

#[test]
fn test_ratio_scenarios() {
    // 10 checks, 4 critical -> 0.4 > 0.3
    assert_eq!(tally(4, 0, 6).verdict(), HealthStatus::Critical);
    // 10 checks, 6 moderate -> 0.6 > 0.5
    assert_eq!(tally(0, 6, 4).verdict(), HealthStatus::Moderate);
    // 10 checks, all good
    assert_eq!(tally(0, 0, 10).verdict(), HealthStatus::Good);
}

#[test]
fn test_healthy_nodes_and_system() {
    let nodes = vec![
        online_node("eu-1", 0.10, 200, 1000, Ping::Millis(20.0)),
        online_node("eu-2", 0.20, 300, 1000, Ping::Millis(35.0)),
    ];
    let system = SystemRecord::new(15.0, 30.0, 40.0);

    assert_eq!(
        default_formatter().get_overall_health(&nodes, Some(&system)),
        HealthStatus::Good
    );
}

#[test]
fn test_missing_ping_counts_as_critical() {
    // One node: cpu good, ram good, ping defaults to 999 -> 1/3 critical.
    let nodes = vec![online_node("eu-1", 0.10, 200, 1000, Ping::Missing)];
    assert_eq!(
        default_formatter().get_overall_health(&nodes, None),
        HealthStatus::Critical
    );
}

#[test]
fn test_null_ping_is_offline_not_critical() {
    // ping: null classifies as offline; cpu and ram good -> 0/3 critical.
    let nodes: Vec<NodeRecord> = serde_json::from_str(
        r#"[{"name": "eu-1", "online": true, "ping": null,
             "stats": {"cpu": 0.1, "memory": {"used": 100, "allocated": 1000}}}]"#,
    )
    .unwrap();
    assert_eq!(nodes[0].ping, Ping::Null);
    assert_eq!(
        default_formatter().get_overall_health(&nodes, None),
        HealthStatus::Good
    );
}

#[test]
fn test_absent_ping_key_defaults_to_critical() {
    let nodes: Vec<NodeRecord> = serde_json::from_str(
        r#"[{"name": "eu-1", "online": true,
             "stats": {"cpu": 0.1, "memory": {"used": 100, "allocated": 1000}}}]"#,
    )
    .unwrap();
    assert_eq!(nodes[0].ping, Ping::Missing);
    assert_eq!(
        default_formatter().get_overall_health(&nodes, None),
        HealthStatus::Critical
    );
}

#[test]
fn test_one_critical_in_six_is_moderate() {
    // 1/6 critical is above 0.1 but below 0.3.
    let nodes = vec![online_node("eu-1", 0.95, 200, 1000, Ping::Millis(20.0))];
    let system = SystemRecord::new(15.0, 30.0, 40.0);

    assert_eq!(
        default_formatter().get_overall_health(&nodes, Some(&system)),
        HealthStatus::Moderate
    );
}

#[test]
fn test_mostly_moderate_is_moderate() {
    // cpu 60% moderate, ram 80% moderate, ping 150 moderate, system all moderate.
    let nodes = vec![online_node("eu-1", 0.60, 800, 1000, Ping::Millis(150.0))];
    let system = SystemRecord::new(60.0, 75.0, 85.0);

    assert_eq!(
        default_formatter().get_overall_health(&nodes, Some(&system)),
        HealthStatus::Moderate
    );
}

#[test]
fn test_zero_allocated_memory_fails_closed() {
    // ram check is critical, cpu and ping good: 1/3 > 0.3
    let nodes = vec![online_node("eu-1", 0.10, 0, 0, Ping::Millis(20.0))];
    assert_eq!(
        default_formatter().get_overall_health(&nodes, None),
        HealthStatus::Critical
    );
}

#[test]
fn test_online_node_without_stats_fails_closed() {
    let nodes = vec![NodeRecord {
        name: "eu-1".to_string(),
        online: true,
        stats: None,
        ping: Ping::Millis(20.0),
    }];
    assert_eq!(
        default_formatter().get_overall_health(&nodes, None),
        HealthStatus::Critical
    );
}

#[test]
fn test_custom_thresholds_change_verdict() {
    let mut config = HealthConfig::default();
    config
        .thresholds
        .set(MetricType::Ping, ThresholdPair::new(1000.0, 2000.0));
    let formatter = HealthFormatter::new(config);

    let nodes = vec![online_node("eu-1", 0.10, 200, 1000, Ping::Missing)];
    assert_eq!(formatter.get_overall_health(&nodes, None), HealthStatus::Good);
}

#[test]
fn test_load_indicator() {
    let formatter = default_formatter();
    let emojis = formatter.config().emojis.clone();

    assert_eq!(formatter.get_load_indicator(3.0, 0), emojis.offline);
    assert_eq!(formatter.get_load_indicator(1.0, 4), emojis.good);
    // Assumed bands: 70% per core ends good, 90% per core starts critical.
    assert_eq!(formatter.get_load_indicator(3.0, 4), emojis.moderate);
    assert_eq!(formatter.get_load_indicator(8.0, 4), emojis.critical);
}

#[test]
fn test_status_color_fallback() {
    assert_eq!(get_status_color("unknown"), get_status_color("offline"));
    assert_eq!(get_status_color(""), 0x808080);
    assert_eq!(
        get_status_color(HealthStatus::Critical.as_str()),
        HealthStatus::Critical.color()
    );
}
