//! Database configuration and transport errors

use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for remote requests
pub type TransportResult<T> = Result<T, TransportError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    /// Config file is not valid JSON for [`super::DatabaseConfig`]
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config parsed but failed validation
    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Read(_) => "CONFIG_READ_FAILED",
            ConfigError::Parse(_) => "CONFIG_PARSE_FAILED",
            ConfigError::Invalid(_) => "CONFIG_INVALID",
        }
    }
}

/// Errors surfaced by a [`super::Transport`]
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The request never produced a response
    #[error("Request to {endpoint} failed: {reason}")]
    Request { endpoint: String, reason: String },

    /// The remote answered with a non-success status
    #[error("Remote returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not JSON
    #[error("Invalid JSON response: {0}")]
    InvalidJson(String),
}

impl TransportError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            TransportError::Request { .. } => "TRANSPORT_REQUEST_FAILED",
            TransportError::Status { .. } => "TRANSPORT_BAD_STATUS",
            TransportError::InvalidJson(_) => "TRANSPORT_INVALID_JSON",
        }
    }
}
