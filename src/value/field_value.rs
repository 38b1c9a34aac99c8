//! Native field values

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value as JsonValue};

use crate::database::{Database, Reference};

/// Key that marks a reference in plain JSON input: `{"$ref": "col/doc"}`
pub const REFERENCE_KEY: &str = "$ref";

/// A native value as seen by callers
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    String(String),
    Timestamp(DateTime<Utc>),
    Reference(Reference),
    Array(Vec<FieldValue>),
    Map(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Short type name used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Boolean(_) => "boolean",
            FieldValue::Integer(_) => "integer",
            FieldValue::Double(_) => "double",
            FieldValue::String(_) => "string",
            FieldValue::Timestamp(_) => "timestamp",
            FieldValue::Reference(_) => "reference",
            FieldValue::Array(_) => "array",
            FieldValue::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, FieldValue::Double(d) if d.is_nan())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            FieldValue::Reference(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, FieldValue>> {
        match self {
            FieldValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Build a value from plain JSON.
    ///
    /// Integral numbers become `Integer`, other numbers `Double`. An object
    /// whose only key is `$ref` with a string value becomes a reference in
    /// `db`.
    pub fn from_json(json: &JsonValue, db: &Database) -> Self {
        match json {
            JsonValue::Null => FieldValue::Null,
            JsonValue::Bool(b) => FieldValue::Boolean(*b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Integer(i),
                None => FieldValue::Double(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => FieldValue::String(s.clone()),
            JsonValue::Array(items) => {
                FieldValue::Array(items.iter().map(|v| Self::from_json(v, db)).collect())
            }
            JsonValue::Object(map) => {
                if map.len() == 1 {
                    if let Some(JsonValue::String(path)) = map.get(REFERENCE_KEY) {
                        return FieldValue::Reference(db.reference(path));
                    }
                }
                FieldValue::Map(
                    map.iter()
                        .map(|(k, v)| (k.clone(), Self::from_json(v, db)))
                        .collect(),
                )
            }
        }
    }

    /// Plain JSON rendering for display.
    ///
    /// References render as their full name, timestamps as RFC 3339 and
    /// non-finite doubles as strings.
    pub fn to_json(&self) -> JsonValue {
        match self {
            FieldValue::Null => JsonValue::Null,
            FieldValue::Boolean(b) => JsonValue::Bool(*b),
            FieldValue::Integer(i) => JsonValue::from(*i),
            FieldValue::Double(d) => serde_json::Number::from_f64(*d)
                .map(JsonValue::Number)
                .unwrap_or_else(|| JsonValue::String(d.to_string())),
            FieldValue::String(s) => JsonValue::String(s.clone()),
            FieldValue::Timestamp(t) => {
                JsonValue::String(t.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            FieldValue::Reference(r) => JsonValue::String(r.name()),
            FieldValue::Array(items) => {
                JsonValue::Array(items.iter().map(FieldValue::to_json).collect())
            }
            FieldValue::Map(map) => JsonValue::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect::<Map<String, JsonValue>>(),
            ),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Integer(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Integer(i64::from(i))
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Integer(i64::from(i))
    }
}

impl From<f64> for FieldValue {
    fn from(d: f64) -> Self {
        FieldValue::Double(d)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(t: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(t)
    }
}

impl From<Reference> for FieldValue {
    fn from(r: Reference) -> Self {
        FieldValue::Reference(r)
    }
}

impl From<&Reference> for FieldValue {
    fn from(r: &Reference) -> Self {
        FieldValue::Reference(r.clone())
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}
