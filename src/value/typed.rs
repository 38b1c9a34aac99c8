//! Wire typed values and the encoder

use chrono::SecondsFormat;
use serde::{Serialize, Serializer};

use super::errors::{ValueError, ValueResult};
use super::field_value::FieldValue;

/// A double as the wire expects it.
///
/// Finite values serialize as JSON numbers; NaN and the infinities use the
/// string markers `"NaN"`, `"Infinity"` and `"-Infinity"`.
#[derive(Debug, Clone, Copy)]
pub struct WireDouble(pub f64);

impl PartialEq for WireDouble {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 || (self.0.is_nan() && other.0.is_nan())
    }
}

impl Serialize for WireDouble {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let d = self.0;
        if d.is_nan() {
            serializer.serialize_str("NaN")
        } else if d == f64::INFINITY {
            serializer.serialize_str("Infinity")
        } else if d == f64::NEG_INFINITY {
            serializer.serialize_str("-Infinity")
        } else {
            serializer.serialize_f64(d)
        }
    }
}

/// Tagged wire value, serialized as a single-key object
/// (`{"integerValue": "11"}`, `{"nullValue": null}`, ...)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TypedValue {
    NullValue(()),
    BooleanValue(bool),
    /// Decimal string; the wire carries 64-bit integers as strings
    IntegerValue(String),
    DoubleValue(WireDouble),
    TimestampValue(String),
    StringValue(String),
    ReferenceValue(String),
    ArrayValue(ArrayValue),
}

/// Element list of an `arrayValue`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayValue {
    pub values: Vec<TypedValue>,
}

/// Encode a scalar value.
///
/// Precedence, first match wins: reference, null, NaN, integral number,
/// other number, string/boolean, timestamp. Arrays and maps are rejected.
pub fn encode(value: &FieldValue) -> ValueResult<TypedValue> {
    let typed = match value {
        FieldValue::Reference(r) => TypedValue::ReferenceValue(r.name()),
        FieldValue::Null => TypedValue::NullValue(()),
        FieldValue::Double(d) if d.is_nan() => TypedValue::DoubleValue(WireDouble(f64::NAN)),
        FieldValue::Integer(i) => TypedValue::IntegerValue(i.to_string()),
        FieldValue::Double(d) => match integral(*d) {
            Some(i) => TypedValue::IntegerValue(i.to_string()),
            None => TypedValue::DoubleValue(WireDouble(*d)),
        },
        FieldValue::String(s) => TypedValue::StringValue(s.clone()),
        FieldValue::Boolean(b) => TypedValue::BooleanValue(*b),
        FieldValue::Timestamp(t) => {
            TypedValue::TimestampValue(t.to_rfc3339_opts(SecondsFormat::AutoSi, true))
        }
        FieldValue::Array(_) | FieldValue::Map(_) => {
            return Err(ValueError::UnsupportedValueType(value.kind()))
        }
    };
    Ok(typed)
}

/// Encode a list of scalars as one `arrayValue`.
///
/// Elements go through [`encode`], so nested arrays and maps are rejected.
pub fn encode_array(items: &[FieldValue]) -> ValueResult<TypedValue> {
    let values = items.iter().map(encode).collect::<ValueResult<Vec<_>>>()?;
    Ok(TypedValue::ArrayValue(ArrayValue { values }))
}

/// The integer a double holds exactly, if any
fn integral(d: f64) -> Option<i64> {
    // i64::MAX is not representable as f64; the bound is exclusive
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if d.is_finite() && d.fract() == 0.0 && d >= -LIMIT && d < LIMIT {
        Some(d as i64)
    } else {
        None
    }
}
