//! Pagination cursors

use serde::Serialize;

use super::errors::{QueryError, QueryResult};
use crate::value::{encode, FieldValue, TypedValue};

/// Position in the result set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cursor {
    pub values: Vec<TypedValue>,
    pub before: bool,
}

impl Cursor {
    /// Normalize a `startAt`/`endAt` option.
    ///
    /// Only a single document reference is accepted; it becomes a
    /// one-value cursor positioned before that document.
    pub fn parse(argument: &'static str, value: &FieldValue) -> QueryResult<Self> {
        let invalid = || QueryError::invalid(argument, "Expected a reference to a document");

        match value.as_reference() {
            Some(reference) if reference.is_document() => {
                let value = encode(value).map_err(|_| invalid())?;
                Ok(Self {
                    values: vec![value],
                    before: true,
                })
            }
            _ => Err(invalid()),
        }
    }
}
