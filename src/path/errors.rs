//! Path model errors

use thiserror::Error;

/// Result type for path navigation
pub type PathResult<T> = Result<T, PathError>;

/// Errors raised while navigating addresses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The root address was asked for its parent
    #[error("Can't get parent of a root collection")]
    NoParentOfRoot,
}

impl PathError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            PathError::NoParentOfRoot => "PATH_NO_PARENT_OF_ROOT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PathError::NoParentOfRoot;
        assert_eq!(err.to_string(), "Can't get parent of a root collection");
        assert_eq!(err.code(), "PATH_NO_PARENT_OF_ROOT");
    }
}
