//! Query errors
//!
//! Validation failures are raised by [`super::Query::new`] and always name
//! the offending option. Remote failures come out of [`super::Query::run`]
//! unchanged.

use thiserror::Error;

use crate::database::TransportError;
use crate::document::DocumentError;
use crate::path::PathError;

/// Result type for query compilation and execution
pub type QueryResult<T> = Result<T, QueryError>;

/// Query errors
#[derive(Debug, Clone, Error)]
pub enum QueryError {
    // ==================
    // Validation
    // ==================
    /// An option has the wrong shape or meaning
    #[error("Invalid argument \"{argument}\": {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },

    // ==================
    // Execution
    // ==================
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    /// runQuery answered with something other than an array
    #[error("Unexpected runQuery response: {0}")]
    UnexpectedResponse(String),

    #[error("Failed to serialize query: {0}")]
    Serialization(String),
}

impl QueryError {
    pub fn invalid(argument: &'static str, reason: impl Into<String>) -> Self {
        QueryError::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::InvalidArgument { .. } => "QUERY_INVALID_ARGUMENT",
            QueryError::Path(e) => e.code(),
            QueryError::Transport(e) => e.code(),
            QueryError::Document(e) => e.code(),
            QueryError::UnexpectedResponse(_) => "QUERY_UNEXPECTED_RESPONSE",
            QueryError::Serialization(_) => "QUERY_SERIALIZATION_FAILED",
        }
    }

    /// True for errors raised before any request is sent
    pub fn is_validation(&self) -> bool {
        matches!(self, QueryError::InvalidArgument { .. })
    }

    /// Name of the offending option, for validation errors
    pub fn argument(&self) -> Option<&'static str> {
        match self {
            QueryError::InvalidArgument { argument, .. } => Some(*argument),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(e: serde_json::Error) -> Self {
        QueryError::Serialization(e.to_string())
    }
}
