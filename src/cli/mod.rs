//! CLI module for notedb
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP server
//! - config: Print the effective configuration

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, ConfigArgs};
pub use commands::{
    load_config, load_config_file, render_config, run, run_command, serve, show_config,
};
pub use errors::{CliError, CliResult};
