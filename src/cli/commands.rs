//! CLI command implementations
//!
//! `serve` boot sequence:
//! 1. Load and validate configuration
//! 2. Apply the configured log level
//! 3. Construct the store (one instance for the process lifetime)
//! 4. Start the tokio runtime and serve until a shutdown signal

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event, Logger};
use crate::store::{InMemoryStore, RecordStore};

use super::args::{Command, ConfigArgs};
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config } => serve(&config),
        Command::Config { config } => show_config(&config),
    }
}

/// Read a configuration file
///
/// Every field is optional; missing fields take their defaults.
pub fn load_config_file(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
}

/// Resolve the effective configuration: file, then flag overrides, then validation
pub fn load_config(args: &ConfigArgs) -> CliResult<HttpServerConfig> {
    let mut config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    config.validate().map_err(CliError::config_error)?;
    Ok(config)
}

/// Start the HTTP server and block until it shuts down
pub fn serve(args: &ConfigArgs) -> CliResult<()> {
    let config = load_config(args)?;
    let severity = config.log_severity().map_err(CliError::config_error)?;
    Logger::set_min_severity(severity);
    log_event(Event::ServerStart);

    let addr = config.socket_addr();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("addr", addr.as_str()), ("log_level", severity.as_str())],
    );

    let store: Arc<dyn RecordStore> = Arc::new(InMemoryStore::new());
    let server = HttpServer::with_config(config, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start()).map_err(|e| {
        let error = e.to_string();
        log_event_with_fields(Event::ServerFailed, &[("error", error.as_str())]);
        CliError::serve_failed(format!("HTTP server failed: {}", e))
    })
}

/// Effective configuration as pretty-printed JSON
pub fn render_config(args: &ConfigArgs) -> CliResult<String> {
    let config = load_config(args)?;
    serde_json::to_string_pretty(&config)
        .map_err(|e| CliError::config_error(format!("Failed to render config: {}", e)))
}

/// Print the effective configuration
pub fn show_config(args: &ConfigArgs) -> CliResult<()> {
    println!("{}", render_config(args)?);
    Ok(())
}
