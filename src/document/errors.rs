//! Document decoding errors

use thiserror::Error;

use crate::database::TransportError;

/// Result type for document decoding
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Errors raised while decoding a raw document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// Raw document has no string `name`
    #[error("Document is missing its name")]
    MissingName,

    /// `name` does not belong to this database
    #[error("Document name {0} is outside this database")]
    InvalidName(String),

    /// A field carried a typed value this decoder does not know
    #[error("Unsupported value in field {field}: {reason}")]
    UnsupportedValue { field: String, reason: String },

    /// A timestamp failed RFC 3339 parsing
    #[error("Invalid timestamp {0}")]
    InvalidTimestamp(String),

    /// An integerValue was not a 64-bit decimal
    #[error("Invalid integer {0}")]
    InvalidInteger(String),
}

impl DocumentError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            DocumentError::MissingName => "DOCUMENT_MISSING_NAME",
            DocumentError::InvalidName(_) => "DOCUMENT_INVALID_NAME",
            DocumentError::UnsupportedValue { .. } => "DOCUMENT_UNSUPPORTED_VALUE",
            DocumentError::InvalidTimestamp(_) => "DOCUMENT_INVALID_TIMESTAMP",
            DocumentError::InvalidInteger(_) => "DOCUMENT_INVALID_INTEGER",
        }
    }
}

/// Result type for single-document reads
pub type ReadResult<T> = Result<T, ReadError>;

/// Errors raised by [`crate::database::Reference::get`]
#[derive(Debug, Error)]
pub enum ReadError {
    /// Only document references can be read
    #[error("{0} is not a document reference")]
    NotADocument(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

impl ReadError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ReadError::NotADocument(_) => "DOCUMENT_NOT_A_DOCUMENT",
            ReadError::Transport(e) => e.code(),
            ReadError::Document(e) => e.code(),
        }
    }
}
