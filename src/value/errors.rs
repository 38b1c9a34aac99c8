//! Value encoding errors

use thiserror::Error;

/// Result type for value encoding
pub type ValueResult<T> = Result<T, ValueError>;

/// Errors raised by the typed-value encoder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The value has no scalar wire representation
    #[error("Unsupported value type: {0}")]
    UnsupportedValueType(&'static str),
}

impl ValueError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ValueError::UnsupportedValueType(_) => "VALUE_UNSUPPORTED_TYPE",
        }
    }
}
