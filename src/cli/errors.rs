//! CLI errors
//!
//! Each variant prints with its `NOTEDB_CLI_*` code; `main` exits 1 on any of them.

use thiserror::Error;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// Failures surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Config file unreadable, malformed or invalid, or a bad flag value
    #[error("NOTEDB_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    /// Runtime or listener could not start, or the server failed
    #[error("NOTEDB_CLI_SERVE_FAILED: {0}")]
    ServeFailed(String),
}

impl CliError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn serve_failed(msg: impl Into<String>) -> Self {
        Self::ServeFailed(msg.into())
    }

    /// Stable code printed in front of the message
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "NOTEDB_CLI_CONFIG_ERROR",
            Self::ServeFailed(_) => "NOTEDB_CLI_SERVE_FAILED",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Config(msg) | Self::ServeFailed(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::config_error("bad port");
        assert_eq!(err.to_string(), "NOTEDB_CLI_CONFIG_ERROR: bad port");
        assert_eq!(err.code(), "NOTEDB_CLI_CONFIG_ERROR");
        assert_eq!(err.message(), "bad port");
    }

    #[test]
    fn test_serve_failed() {
        let err = CliError::serve_failed("address in use");
        assert_eq!(err.code(), "NOTEDB_CLI_SERVE_FAILED");
        assert!(err.to_string().ends_with("address in use"));
    }
}
