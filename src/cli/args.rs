//! CLI argument definitions using clap
//!
//! Commands:
//! - notedb serve [--config <path>] [--host <host>] [--port <port>]
//! - notedb config [--config <path>] [--host <host>] [--port <port>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// notedb - A concurrency-safe in-memory note store with a REST front-end
#[derive(Parser, Debug)]
#[command(name = "notedb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Print the effective configuration as JSON and exit
    Config {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

/// Configuration sources shared by every command
///
/// Flags override values read from the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(long)]
    pub port: Option<u16>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
