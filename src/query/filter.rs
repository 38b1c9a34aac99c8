//! Filter tree
//!
//! Conditions arrive as `[field, operator, value]` triples, either one
//! triple (short syntax) or a list of triples (compound syntax). Both
//! normalize here into a [`Filter`]:
//!
//! - `==` against null or NaN → unary filter (`IS_NULL` / `IS_NAN`)
//! - `in`, `not-in`, `array-contains-any` → field filter with an
//!   `arrayValue` operand; these require a non-empty array
//! - any other condition      → field filter with an encoded value
//! - two or more conditions   → one `AND` composite, input order kept
//!
//! Composites are built one level deep only.

use serde::Serialize;

use super::errors::{QueryError, QueryResult};
use super::wire::FieldReference;
use crate::value::{encode, encode_array, FieldValue, TypedValue};

const ARGUMENT: &str = "where";

/// Comparison operators of a field filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldOperator {
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    Equal,
    NotEqual,
    ArrayContains,
    In,
    ArrayContainsAny,
    NotIn,
}

impl FieldOperator {
    /// Look up the caller-facing symbol (`"<"`, `"array-contains"`, ...)
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol {
            "<" => FieldOperator::LessThan,
            "<=" => FieldOperator::LessThanOrEqual,
            ">" => FieldOperator::GreaterThan,
            ">=" => FieldOperator::GreaterThanOrEqual,
            "==" => FieldOperator::Equal,
            "!=" => FieldOperator::NotEqual,
            "array-contains" => FieldOperator::ArrayContains,
            "in" => FieldOperator::In,
            "array-contains-any" => FieldOperator::ArrayContainsAny,
            "not-in" => FieldOperator::NotIn,
            _ => return None,
        };
        Some(op)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            FieldOperator::LessThan => "<",
            FieldOperator::LessThanOrEqual => "<=",
            FieldOperator::GreaterThan => ">",
            FieldOperator::GreaterThanOrEqual => ">=",
            FieldOperator::Equal => "==",
            FieldOperator::NotEqual => "!=",
            FieldOperator::ArrayContains => "array-contains",
            FieldOperator::In => "in",
            FieldOperator::ArrayContainsAny => "array-contains-any",
            FieldOperator::NotIn => "not-in",
        }
    }

    /// Operators whose operand is a list of values
    pub fn takes_array(&self) -> bool {
        matches!(
            self,
            FieldOperator::In | FieldOperator::NotIn | FieldOperator::ArrayContainsAny
        )
    }
}

/// Operators of a unary filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnaryOperator {
    IsNull,
    IsNan,
}

/// Operators of a composite filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompositeOperator {
    And,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldFilter {
    pub field: FieldReference,
    pub op: FieldOperator,
    pub value: TypedValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnaryFilter {
    pub field: FieldReference,
    pub op: UnaryOperator,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeFilter {
    pub op: CompositeOperator,
    pub filters: Vec<Filter>,
}

/// A normalized filter node, serialized under its wire tag
/// (`fieldFilter`, `unaryFilter` or `compositeFilter`)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Filter {
    FieldFilter(FieldFilter),
    UnaryFilter(UnaryFilter),
    CompositeFilter(CompositeFilter),
}

impl Filter {
    /// Build one condition.
    ///
    /// The unary/field split is decided here, once, from the value.
    pub fn condition(field: &FieldValue, op: &FieldValue, value: &FieldValue) -> QueryResult<Self> {
        let field_path = field
            .as_str()
            .ok_or_else(|| QueryError::invalid(ARGUMENT, "Invalid field path"))?;

        let op = op
            .as_str()
            .and_then(FieldOperator::from_symbol)
            .ok_or_else(|| QueryError::invalid(ARGUMENT, "Invalid operator"))?;

        let unary = if value.is_null() {
            Some(UnaryOperator::IsNull)
        } else if value.is_nan() {
            Some(UnaryOperator::IsNan)
        } else {
            None
        };

        if let Some(unary) = unary {
            if op != FieldOperator::Equal {
                return Err(QueryError::invalid(
                    ARGUMENT,
                    "Null and NaN can only be used with the == operator",
                ));
            }
            return Ok(Filter::UnaryFilter(UnaryFilter {
                field: FieldReference::new(field_path),
                op: unary,
            }));
        }

        let encoded = if op.takes_array() {
            match value.as_array() {
                Some(items) if !items.is_empty() => encode_array(items),
                _ => {
                    return Err(QueryError::invalid(
                        ARGUMENT,
                        format!(
                            "The \"{}\" operator requires a non-empty array of values",
                            op.symbol()
                        ),
                    ))
                }
            }
        } else {
            encode(value)
        };
        let value = encoded.map_err(|e| QueryError::invalid(ARGUMENT, e.to_string()))?;

        Ok(Filter::FieldFilter(FieldFilter {
            field: FieldReference::new(field_path),
            op,
            value,
        }))
    }

    /// Combine conditions: none → `None`, one → itself, more → `AND`
    pub fn all(mut filters: Vec<Filter>) -> Option<Self> {
        match filters.len() {
            0 => None,
            1 => filters.pop(),
            _ => Some(Filter::CompositeFilter(CompositeFilter {
                op: CompositeOperator::And,
                filters,
            })),
        }
    }

    /// Number of leaf conditions
    pub fn len(&self) -> usize {
        match self {
            Filter::CompositeFilter(c) => c.filters.iter().map(Filter::len).sum(),
            _ => 1,
        }
    }

    /// Normalize the `where` option.
    ///
    /// The first element decides the syntax: an array means a list of
    /// triples, anything else means a single triple.
    pub fn parse(value: &FieldValue) -> QueryResult<Option<Self>> {
        let items = value.as_array().ok_or_else(shape_error)?;

        let compound = matches!(items.first(), Some(FieldValue::Array(_)));
        let triples: Vec<&[FieldValue]> = if compound {
            items
                .iter()
                .map(|item| item.as_array().ok_or_else(shape_error))
                .collect::<QueryResult<_>>()?
        } else if items.is_empty() {
            Vec::new()
        } else {
            vec![items]
        };

        let filters = triples
            .into_iter()
            .map(|triple| match triple {
                [field, op, value] => Filter::condition(field, op, value),
                _ => Err(shape_error()),
            })
            .collect::<QueryResult<Vec<_>>>()?;

        Ok(Filter::all(filters))
    }
}

fn shape_error() -> QueryError {
    QueryError::invalid(ARGUMENT, "Expected a filter or an array of filters")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn triple(field: &str, op: &str, value: impl Into<FieldValue>) -> FieldValue {
        FieldValue::Array(vec![field.into(), op.into(), value.into()])
    }

    fn to_json(filter: &Filter) -> serde_json::Value {
        serde_json::to_value(filter).unwrap()
    }

    #[test]
    fn test_operator_table() {
        let table = [
            ("<", "LESS_THAN"),
            ("<=", "LESS_THAN_OR_EQUAL"),
            (">", "GREATER_THAN"),
            (">=", "GREATER_THAN_OR_EQUAL"),
            ("==", "EQUAL"),
            ("!=", "NOT_EQUAL"),
            ("array-contains", "ARRAY_CONTAINS"),
            ("in", "IN"),
            ("array-contains-any", "ARRAY_CONTAINS_ANY"),
            ("not-in", "NOT_IN"),
        ];
        for (symbol, wire) in table {
            let op = FieldOperator::from_symbol(symbol).unwrap();
            assert_eq!(serde_json::to_value(op).unwrap(), json!(wire));
            assert_eq!(op.symbol(), symbol);
        }
        assert!(FieldOperator::from_symbol("===").is_none());
    }

    #[test]
    fn test_field_filter() {
        let filter = Filter::parse(&triple("field.path", ">=", 11)).unwrap().unwrap();
        assert_eq!(
            to_json(&filter),
            json!({
                "fieldFilter": {
                    "field": {"fieldPath": "field.path"},
                    "op": "GREATER_THAN_OR_EQUAL",
                    "value": {"integerValue": "11"}
                }
            })
        );
    }

    #[test]
    fn test_short_and_compound_agree() {
        let short = Filter::parse(&triple("a", "<", "x")).unwrap();
        let compound = Filter::parse(&FieldValue::Array(vec![triple("a", "<", "x")])).unwrap();
        assert_eq!(short, compound);
    }

    #[test]
    fn test_unary_filters() {
        let null = Filter::parse(&triple("f", "==", FieldValue::Null)).unwrap().unwrap();
        assert_eq!(
            to_json(&null),
            json!({"unaryFilter": {"field": {"fieldPath": "f"}, "op": "IS_NULL"}})
        );

        let nan = Filter::parse(&triple("f", "==", f64::NAN)).unwrap().unwrap();
        assert_eq!(
            to_json(&nan),
            json!({"unaryFilter": {"field": {"fieldPath": "f"}, "op": "IS_NAN"}})
        );
    }

    #[test]
    fn test_null_with_other_operator() {
        for op in ["<", "!=", "in"] {
            let err = Filter::parse(&triple("f", op, FieldValue::Null)).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Invalid argument \"where\": Null and NaN can only be used with the == operator"
            );
        }
        assert!(Filter::parse(&triple("f", ">", f64::NAN)).is_err());
    }

    #[test]
    fn test_composite_keeps_order() {
        let filter = Filter::parse(&FieldValue::Array(vec![
            triple("b", "==", 1),
            triple("a", "==", FieldValue::Null),
        ]))
        .unwrap()
        .unwrap();

        match &filter {
            Filter::CompositeFilter(c) => {
                assert_eq!(c.op, CompositeOperator::And);
                assert!(matches!(&c.filters[0], Filter::FieldFilter(f) if f.field.field_path == "b"));
                assert!(matches!(&c.filters[1], Filter::UnaryFilter(f) if f.field.field_path == "a"));
            }
            other => panic!("expected composite, got {:?}", other),
        }
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_empty_where() {
        assert_eq!(Filter::parse(&FieldValue::Array(vec![])).unwrap(), None);
    }

    #[test]
    fn test_invalid_field_path() {
        let value = FieldValue::Array(vec![FieldValue::Integer(42), ">=".into(), 11.into()]);
        let err = Filter::parse(&value).unwrap_err();
        assert_eq!(err.to_string(), "Invalid argument \"where\": Invalid field path");
    }

    #[test]
    fn test_invalid_operator() {
        let err = Filter::parse(&triple("path", "===", 11)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid argument \"where\": Invalid operator");
    }

    #[test]
    fn test_wrong_arity() {
        let pair = FieldValue::Array(vec!["a".into(), "==".into()]);
        assert!(Filter::parse(&pair).is_err());
        assert!(Filter::parse(&FieldValue::from("a == 1")).is_err());
    }

    #[test]
    fn test_list_operators_take_arrays() {
        let filter = Filter::parse(&triple("tags", "in", vec!["a", "b"])).unwrap().unwrap();
        assert_eq!(
            to_json(&filter),
            json!({
                "fieldFilter": {
                    "field": {"fieldPath": "tags"},
                    "op": "IN",
                    "value": {"arrayValue": {"values": [{"stringValue": "a"}, {"stringValue": "b"}]}}
                }
            })
        );

        for op in ["not-in", "array-contains-any"] {
            assert!(Filter::parse(&triple("tags", op, vec![1, 2])).is_ok());
        }
    }

    #[test]
    fn test_list_operators_reject_scalars() {
        let err = Filter::parse(&triple("tags", "in", "a")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument \"where\": The \"in\" operator requires a non-empty array of values"
        );
        assert!(Filter::parse(&triple("tags", "not-in", Vec::<String>::new())).is_err());
        assert!(Filter::parse(&triple("tags", "array-contains-any", 3)).is_err());
    }

    #[test]
    fn test_unsupported_value() {
        let err = Filter::parse(&triple("tags", "==", vec!["a", "b"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument \"where\": Unsupported value type: array"
        );

        let nested = FieldValue::Array(vec![FieldValue::Array(vec![])]);
        assert!(Filter::parse(&triple("tags", "in", nested)).is_err());
    }
}
