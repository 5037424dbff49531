//! Observability subsystem for planpick
//!
//! This module provides:
//! - Structured logging (JSON)
//! - Lifecycle event tracing
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on execution
//! 3. No async or background threads
//! 4. Deterministic output
//! 5. Logs go to stderr, keeping stdout free for responses
//!
//! # Usage
//!
//! ```ignore
//! use planpick::observability::{log_event_with_fields, Event, Logger};
//!
//! // Log an event
//! Logger::info("PLAN_SELECTED", &[("plan_index", "1")]);
//!
//! // Or through the typed event set
//! log_event_with_fields(Event::CatalogLoaded, &[("countries", "12")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    if event.is_fatal() {
        Logger::fatal(event.as_str(), fields);
    } else {
        Logger::info(event.as_str(), fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // This just verifies no panic
        log_event(Event::BootStart);
        log_event(Event::BootComplete);
    }

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::ConfigLoaded, &[("catalog_path", "/tmp/catalog.json")]);
    }

    #[test]
    fn test_fatal_event_logs_without_panic() {
        log_event_with_fields(Event::CatalogLoadFailed, &[("reason", "missing file")]);
    }
}
