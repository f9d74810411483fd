//! Process lifecycle events
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Serve command started
    ServerStart,
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Listener bound, accepting requests
    ServerListening,
    /// Shutdown signal received
    ShutdownStart,
    /// In-flight requests drained
    ShutdownComplete,
    /// Server could not start or crashed (FATAL)
    ServerFailed,
}

impl Event {
    /// Returns the event name as it appears in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ServerStart => "SERVER_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::ServerFailed => "SERVER_FAILED",
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::ServerFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
