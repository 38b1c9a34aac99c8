//! Ordering
//!
//! `orderBy` accepts a field path, an `{field, direction}` object, or a list
//! mixing both. Every form compiles to a list of [`Order`] entries in input
//! order.

use serde::Serialize;

use super::errors::{QueryError, QueryResult};
use super::wire::FieldReference;
use crate::value::FieldValue;

const ARGUMENT: &str = "orderBy";

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// `"asc"` or `"desc"`, case-sensitive
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "asc" => Some(Direction::Ascending),
            "desc" => Some(Direction::Descending),
            _ => None,
        }
    }
}

/// One ordering entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub field: FieldReference,
    pub direction: Direction,
}

impl Order {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: FieldReference::new(field),
            direction: Direction::Ascending,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: FieldReference::new(field),
            direction: Direction::Descending,
        }
    }

    /// Normalize the `orderBy` option
    pub fn parse(value: &FieldValue) -> QueryResult<Vec<Self>> {
        match value {
            FieldValue::Array(items) => items.iter().map(Self::parse_one).collect(),
            other => Ok(vec![Self::parse_one(other)?]),
        }
    }

    fn parse_one(value: &FieldValue) -> QueryResult<Self> {
        match value {
            FieldValue::String(field) => Ok(Self::asc(field.as_str())),
            FieldValue::Map(object) => {
                let field = object
                    .get("field")
                    .and_then(FieldValue::as_str)
                    .ok_or_else(shape_error)?;

                let direction = match object.get("direction") {
                    None => Direction::Ascending,
                    Some(d) => d.as_str().and_then(Direction::from_symbol).ok_or_else(|| {
                        QueryError::invalid(
                            ARGUMENT,
                            "\"direction\" property can only be \"asc\" or \"desc\"",
                        )
                    })?,
                };

                Ok(Self {
                    field: FieldReference::new(field),
                    direction,
                })
            }
            _ => Err(shape_error()),
        }
    }
}

fn shape_error() -> QueryError {
    QueryError::invalid(ARGUMENT, "Expected a field path or an order object")
}
