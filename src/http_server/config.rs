//! HTTP Server Configuration
//!
//! Host, port, CORS, per-request deadline, shutdown grace period and log level.

use std::time::Duration;

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

use crate::observability::Severity;

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: empty, permissive)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Deadline placed on every request's operation context (default: 5000)
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Grace period for in-flight requests after a shutdown signal (default: 5000)
    #[serde(default = "default_shutdown_timeout_ms")]
    pub shutdown_timeout_ms: u64,

    /// Minimum log severity (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout_ms() -> u64 {
    5000
}

fn default_shutdown_timeout_ms() -> u64 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            request_timeout_ms: default_request_timeout_ms(),
            shutdown_timeout_ms: default_shutdown_timeout_ms(),
            log_level: default_log_level(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.shutdown_timeout_ms)
    }

    pub fn log_severity(&self) -> Result<Severity, String> {
        self.log_level.parse()
    }

    /// Reject values the server cannot run with
    pub fn validate(&self) -> Result<(), String> {
        if self.request_timeout_ms == 0 {
            return Err("request_timeout_ms must be > 0".to_string());
        }
        if self.shutdown_timeout_ms == 0 {
            return Err("shutdown_timeout_ms must be > 0".to_string());
        }
        self.log_severity()?;
        for origin in &self.cors_origins {
            validate_origin(origin)?;
        }
        Ok(())
    }
}

/// An origin is `http(s)://host[:port]` with no path and a valid header value
fn validate_origin(origin: &str) -> Result<(), String> {
    let authority = origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"));

    let well_formed = match authority {
        Some(host) => {
            !host.is_empty()
                && !host.contains(|c: char| c == '/' || c.is_whitespace())
                && HeaderValue::from_str(origin).is_ok()
        }
        None => false,
    };

    if well_formed {
        Ok(())
    } else {
        Err(format!("invalid cors origin '{}'", origin))
    }
}
