//! Typed-value decoding

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;

use super::errors::{DocumentError, DocumentResult};
use crate::database::Database;
use crate::value::FieldValue;

/// Decode one wire typed value. `field` names the value in errors.
pub fn decode_value(field: &str, raw: &JsonValue, db: &Database) -> DocumentResult<FieldValue> {
    let object = raw
        .as_object()
        .filter(|o| o.len() == 1)
        .ok_or_else(|| unsupported(field, "expected a single-key typed value"))?;

    // Checked above: exactly one entry
    let Some((kind, inner)) = object.iter().next() else {
        return Err(unsupported(field, "empty typed value"));
    };

    match kind.as_str() {
        "nullValue" => Ok(FieldValue::Null),
        "booleanValue" => inner
            .as_bool()
            .map(FieldValue::Boolean)
            .ok_or_else(|| unsupported(field, "booleanValue is not a boolean")),
        "integerValue" => decode_integer(inner).map(FieldValue::Integer),
        "doubleValue" => decode_double(field, inner).map(FieldValue::Double),
        "stringValue" => inner
            .as_str()
            .map(|s| FieldValue::String(s.to_string()))
            .ok_or_else(|| unsupported(field, "stringValue is not a string")),
        "timestampValue" => {
            let raw = inner
                .as_str()
                .ok_or_else(|| unsupported(field, "timestampValue is not a string"))?;
            parse_timestamp(raw).map(FieldValue::Timestamp)
        }
        "referenceValue" => {
            let name = inner
                .as_str()
                .ok_or_else(|| unsupported(field, "referenceValue is not a string"))?;
            db.reference_from_name(name)
                .map(FieldValue::Reference)
                .ok_or_else(|| DocumentError::InvalidName(name.to_string()))
        }
        "arrayValue" => {
            let values = match inner.get("values") {
                Some(JsonValue::Array(values)) => values.as_slice(),
                Some(_) => return Err(unsupported(field, "arrayValue.values is not an array")),
                None => &[],
            };
            values
                .iter()
                .enumerate()
                .map(|(i, v)| decode_value(&format!("{}[{}]", field, i), v, db))
                .collect::<DocumentResult<Vec<_>>>()
                .map(FieldValue::Array)
        }
        "mapValue" => match inner.get("fields") {
            Some(fields) => decode_fields(Some(field), fields, db).map(FieldValue::Map),
            None => Ok(FieldValue::Map(BTreeMap::new())),
        },
        other => Err(unsupported(field, &format!("unknown value kind {}", other))),
    }
}

/// Decode a `fields` object. `prefix` qualifies nested field names in errors.
pub(crate) fn decode_fields(
    prefix: Option<&str>,
    raw: &JsonValue,
    db: &Database,
) -> DocumentResult<BTreeMap<String, FieldValue>> {
    let object = raw.as_object().ok_or_else(|| {
        unsupported(prefix.unwrap_or("fields"), "fields is not an object")
    })?;

    let mut fields = BTreeMap::new();
    for (key, value) in object {
        let path = match prefix {
            Some(p) => format!("{}.{}", p, key),
            None => key.clone(),
        };
        fields.insert(key.clone(), decode_value(&path, value, db)?);
    }
    Ok(fields)
}

pub(crate) fn parse_timestamp(raw: &str) -> DocumentResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| DocumentError::InvalidTimestamp(raw.to_string()))
}

fn decode_integer(inner: &JsonValue) -> DocumentResult<i64> {
    match inner {
        JsonValue::String(s) => s
            .parse()
            .map_err(|_| DocumentError::InvalidInteger(s.clone())),
        JsonValue::Number(n) => n
            .as_i64()
            .ok_or_else(|| DocumentError::InvalidInteger(n.to_string())),
        other => Err(DocumentError::InvalidInteger(other.to_string())),
    }
}

fn decode_double(field: &str, inner: &JsonValue) -> DocumentResult<f64> {
    match inner {
        JsonValue::Number(n) => n
            .as_f64()
            .ok_or_else(|| unsupported(field, "doubleValue out of range")),
        JsonValue::String(s) => match s.as_str() {
            "NaN" => Ok(f64::NAN),
            "Infinity" => Ok(f64::INFINITY),
            "-Infinity" => Ok(f64::NEG_INFINITY),
            _ => Err(unsupported(field, "doubleValue is not a number")),
        },
        _ => Err(unsupported(field, "doubleValue is not a number")),
    }
}

fn unsupported(field: &str, reason: &str) -> DocumentError {
    DocumentError::UnsupportedValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
