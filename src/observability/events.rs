//! Observable events
//!
//! Every log line names one of these events.

use std::fmt;

use super::logger::Severity;

/// Events emitted while compiling and running queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Database configuration loaded
    ConfigLoaded,
    /// Query options validated and compiled
    QueryCompiled,
    /// runQuery request about to be sent
    QueryRunStart,
    /// runQuery response decoded
    QueryRunComplete,
    /// runQuery request or decoding failed
    QueryRunFailed,
    /// Single document fetched and decoded
    DocumentRead,
    /// Single document fetch or decoding failed
    DocumentReadFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::QueryCompiled => "QUERY_COMPILED",
            Event::QueryRunStart => "QUERY_RUN_START",
            Event::QueryRunComplete => "QUERY_RUN_COMPLETE",
            Event::QueryRunFailed => "QUERY_RUN_FAILED",
            Event::DocumentRead => "DOCUMENT_READ",
            Event::DocumentReadFailed => "DOCUMENT_READ_FAILED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::ConfigLoaded | Event::QueryRunComplete | Event::DocumentRead => {
                Severity::Info
            }
            Event::QueryCompiled | Event::QueryRunStart => Severity::Trace,
            Event::QueryRunFailed | Event::DocumentReadFailed => Severity::Error,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
