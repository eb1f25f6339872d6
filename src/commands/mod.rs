//! CLI command implementations for lavalink-health.
//!
//! This module provides implementations for all CLI subcommands:
//! - `render`: Status report rendering
//! - `config`: Configuration file generation
//! - `check`: Configuration validation

pub mod check;
pub mod config;
pub mod render;

// Re-export command functions
pub use check::command_check;
pub use config::command_config;
pub use render::command_render;
