//! Observability subsystem for notedb
//!
//! - Structured logging (JSON lines)
//! - Operational counters
//! - Lifecycle events
//!
//! # Usage
//!
//! ```ignore
//! use notedb::observability::{Logger, Event, MetricsRegistry};
//!
//! Logger::info("REQUEST_COMPLETE", &[("status", "200")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_created();
//!
//! log_event(Event::ServerStart);
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_fatal() {
        Severity::Fatal
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}
