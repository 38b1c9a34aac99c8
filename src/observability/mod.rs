//! Structured logging
//!
//! One JSON object per line on stderr: `event` first, then `severity`, then
//! the caller's fields sorted by key. Lines below the process-wide minimum
//! severity (default WARN) are dropped.
//!
//! ```ignore
//! use firestore_lite::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::QueryRunComplete, &[("documents", "2")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
