//! lavalink-health - version 0.1.0
//!
//! Status report renderer with tracing logging.
//! This is the main entry point that resolves configuration and dispatches subcommands.

mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use lavalink_health::HealthFormatter;
use tracing::{info, Level};

use cli::{Args, Commands, LogLevel};
use commands::{command_check, command_config, command_render};
use config::{resolve_config, show_config};

/// Initializes tracing logging subsystem with configured log level.
fn setup_logging(args: &Args) {
    let log_level = match args.log_level {
        LogLevel::Off => return,
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return;
    }

    info!("Logging initialized with level: {:?}", args.log_level);
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(&args);

    // Generating a fresh config must not depend on the current one loading.
    if let Some(Commands::Config {
        output,
        format,
        commented,
    }) = &args.command
    {
        return command_config(output.clone(), format.clone(), *commented);
    }

    let config = resolve_config(&args)?;

    if args.show_config {
        return show_config(&config, &args.config_format);
    }

    if args.check_config || matches!(args.command, Some(Commands::Check)) {
        if !command_check(&config)? {
            std::process::exit(1);
        }
        return Ok(());
    }

    if let Err(e) = config.validate() {
        eprintln!("❌ Configuration invalid: {}", e);
        std::process::exit(1);
    }

    let formatter = HealthFormatter::new(config);

    match args.command {
        Some(Commands::Render { input, truncate }) => command_render(&input, truncate, &formatter),
        Some(Commands::Config { .. }) | Some(Commands::Check) => Ok(()),
        None => {
            eprintln!("No command given. Try `lavalink-health render <snapshot.json>` or --help.");
            std::process::exit(2);
        }
    }
}
