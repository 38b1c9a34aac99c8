//! Query configuration
//!
//! Every recognized option is listed here and left unvalidated until
//! [`super::Query::new`]. Values are loosely typed [`FieldValue`]s so the
//! shorthand forms (`"field"` vs `{field, direction}` vs a list) can be
//! told apart and rejected with a precise message.

use serde_json::Value as JsonValue;

use super::errors::{QueryError, QueryResult};
use crate::database::Database;
use crate::value::FieldValue;

/// Raw query options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    /// Array of field paths
    pub select: Option<FieldValue>,
    /// Collection reference, or an array of them (required)
    pub from: Option<FieldValue>,
    /// Applied to every `from` entry
    pub all_descendants: Option<bool>,
    /// `[field, op, value]` or an array of such triples
    pub r#where: Option<FieldValue>,
    /// Field path, `{field, direction}` map, or an array of either
    pub order_by: Option<FieldValue>,
    /// Document reference
    pub start_at: Option<FieldValue>,
    /// Document reference
    pub end_at: Option<FieldValue>,
    pub offset: Option<FieldValue>,
    pub limit: Option<FieldValue>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(mut self, value: impl Into<FieldValue>) -> Self {
        self.select = Some(value.into());
        self
    }

    pub fn from(mut self, value: impl Into<FieldValue>) -> Self {
        self.from = Some(value.into());
        self
    }

    pub fn all_descendants(mut self, all: bool) -> Self {
        self.all_descendants = Some(all);
        self
    }

    /// Sets the `where` option
    pub fn filter(mut self, value: impl Into<FieldValue>) -> Self {
        self.r#where = Some(value.into());
        self
    }

    pub fn order_by(mut self, value: impl Into<FieldValue>) -> Self {
        self.order_by = Some(value.into());
        self
    }

    pub fn start_at(mut self, value: impl Into<FieldValue>) -> Self {
        self.start_at = Some(value.into());
        self
    }

    pub fn end_at(mut self, value: impl Into<FieldValue>) -> Self {
        self.end_at = Some(value.into());
        self
    }

    pub fn offset(mut self, value: impl Into<FieldValue>) -> Self {
        self.offset = Some(value.into());
        self
    }

    pub fn limit(mut self, value: impl Into<FieldValue>) -> Self {
        self.limit = Some(value.into());
        self
    }

    /// Read options from a JSON object.
    ///
    /// Keys use the wire spelling (`orderBy`, `startAt`, ...). Unknown keys
    /// are ignored. References are written as `{"$ref": "col/doc"}`.
    pub fn from_json(json: &JsonValue, db: &Database) -> QueryResult<Self> {
        let object = json
            .as_object()
            .ok_or_else(|| QueryError::invalid("options", "Expected an object"))?;

        let get = |key: &str| object.get(key).map(|v| FieldValue::from_json(v, db));

        let all_descendants = match object.get("allDescendants") {
            None => None,
            Some(JsonValue::Bool(b)) => Some(*b),
            Some(_) => {
                return Err(QueryError::invalid(
                    "allDescendants",
                    "Expected a boolean",
                ))
            }
        };

        Ok(Self {
            select: get("select"),
            from: get("from"),
            all_descendants,
            r#where: get("where"),
            order_by: get("orderBy"),
            start_at: get("startAt"),
            end_at: get("endAt"),
            offset: get("offset"),
            limit: get("limit"),
        })
    }
}
