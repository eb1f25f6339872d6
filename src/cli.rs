//! CLI arguments and subcommands for lavalink-health.
//!
//! This module defines the command-line interface structure using the clap library,
//! including all flags, options, and subcommands.

use clap::{Parser, Subcommand, ValueEnum};
use lavalink_health::DEFAULT_TRUNCATE_LENGTH;
use std::path::PathBuf;

/// Log level options for CLI parsing
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Configuration format options for output
#[derive(Debug, Clone, ValueEnum)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

/// Main CLI arguments structure
#[derive(Parser, Debug)]
#[command(
    name = "lavalink-health",
    about = "Render Lavalink node and host health as status-bot text",
    long_about = "Render Lavalink node and host health as status-bot text.\n\n\
                  Classifies CPU, RAM, disk and ping measurements against configurable \
                  thresholds and prints the emoji report, overall verdict and embed color \
                  a Discord status message would show.",
    version = "0.1.0",
    propagate_version = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log level
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Config file with thresholds and emojis (YAML/JSON/TOML)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Disable all config file loading
    #[arg(long)]
    pub no_config: bool,

    /// Print effective merged config and exit
    #[arg(long)]
    pub show_config: bool,

    /// Output format for --show-config
    #[arg(long, value_enum, default_value = "yaml")]
    pub config_format: ConfigFormat,

    /// Validate config and exit (return code 1 on error)
    #[arg(long)]
    pub check_config: bool,
}

/// Subcommands for additional functionality
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a status report from a JSON snapshot
    Render {
        /// Snapshot file (JSON), or "-" for stdin
        input: PathBuf,

        /// Maximum length of node names
        #[arg(long, default_value_t = DEFAULT_TRUNCATE_LENGTH)]
        truncate: usize,
    },

    /// Generate configuration files
    Config {
        /// Output file path, or "-" for stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "yaml")]
        format: ConfigFormat,

        /// Include comments and examples
        #[arg(long)]
        commented: bool,
    },

    /// Validate the effective configuration
    Check,
}
