//! Validated query

use serde_json::Value as JsonValue;

use super::cursor::Cursor;
use super::errors::{QueryError, QueryResult};
use super::filter::Filter;
use super::options::QueryOptions;
use super::order::Order;
use super::wire::{CollectionSelector, FieldReference, Projection, RunQueryRequest, StructuredQuery};
use crate::database::Reference;
use crate::observability::{log_event_with_fields, Event};
use crate::value::FieldValue;

/// A source collection of a query
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSource {
    pub reference: Reference,
    pub all_descendants: Option<bool>,
}

/// A fully validated query.
///
/// Construction runs every check; a `Query` value always compiles. It is
/// never mutated afterwards: [`Query::with_from`] returns a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    select: Vec<String>,
    from: Vec<CollectionSource>,
    filter: Option<Filter>,
    order_by: Vec<Order>,
    start_at: Option<Cursor>,
    end_at: Option<Cursor>,
    offset: Option<u32>,
    limit: Option<u32>,
}

impl Query {
    /// Validate and normalize `options`
    pub fn new(options: QueryOptions) -> QueryResult<Self> {
        let query = Self {
            select: match options.select {
                Some(ref v) => parse_select(v)?,
                None => Vec::new(),
            },
            from: parse_from(options.from.as_ref(), options.all_descendants)?,
            filter: match options.r#where {
                Some(ref v) => Filter::parse(v)?,
                None => None,
            },
            order_by: match options.order_by {
                Some(ref v) => Order::parse(v)?,
                None => Vec::new(),
            },
            start_at: options
                .start_at
                .as_ref()
                .map(|v| Cursor::parse("startAt", v))
                .transpose()?,
            end_at: options
                .end_at
                .as_ref()
                .map(|v| Cursor::parse("endAt", v))
                .transpose()?,
            offset: options
                .offset
                .as_ref()
                .map(|v| parse_count("offset", v))
                .transpose()?,
            limit: options
                .limit
                .as_ref()
                .map(|v| parse_count("limit", v))
                .transpose()?,
        };

        let filters = query.filter.as_ref().map_or(0, Filter::len).to_string();
        log_event_with_fields(
            Event::QueryCompiled,
            &[
                ("collection", query.from[0].reference.id()),
                ("filters", filters.as_str()),
            ],
        );

        Ok(query)
    }

    /// Copy of this query reading from `from` instead.
    ///
    /// The source list is replaced, not extended. `all_descendants` applies
    /// to the new entries.
    pub fn with_from(
        &self,
        from: impl Into<FieldValue>,
        all_descendants: Option<bool>,
    ) -> QueryResult<Self> {
        let from = parse_from(Some(&from.into()), all_descendants)?;
        Ok(Self {
            from,
            ..self.clone()
        })
    }

    pub fn collections(&self) -> &[CollectionSource] {
        &self.from
    }

    pub fn filter(&self) -> Option<&Filter> {
        self.filter.as_ref()
    }

    pub fn order_by(&self) -> &[Order] {
        &self.order_by
    }

    pub fn offset(&self) -> Option<u32> {
        self.offset
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// Compile to the wire schema
    pub fn structured_query(&self) -> StructuredQuery {
        let select = if self.select.is_empty() {
            None
        } else {
            Some(Projection {
                fields: self.select.iter().map(FieldReference::new).collect(),
            })
        };

        StructuredQuery {
            select,
            from: self
                .from
                .iter()
                .map(|source| CollectionSelector {
                    collection_id: source.reference.id().to_string(),
                    all_descendants: source.all_descendants,
                })
                .collect(),
            filter: self.filter.clone(),
            order_by: self.order_by.clone(),
            start_at: self.start_at.clone(),
            end_at: self.end_at.clone(),
            offset: self.offset,
            limit: self.limit,
        }
    }

    /// runQuery request body
    pub fn request(&self) -> RunQueryRequest {
        RunQueryRequest {
            structured_query: self.structured_query(),
        }
    }

    /// `{"structuredQuery": {...}}` as JSON
    pub fn to_json(&self) -> QueryResult<JsonValue> {
        Ok(serde_json::to_value(self.request())?)
    }
}

fn parse_select(value: &FieldValue) -> QueryResult<Vec<String>> {
    let items = value.as_array().ok_or_else(|| {
        QueryError::invalid("select", "Expected argument to be an array of field paths")
    })?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                QueryError::invalid("select", format!("Field path at index [{}] is not a string", i))
            })
        })
        .collect()
}

fn parse_from(
    value: Option<&FieldValue>,
    all_descendants: Option<bool>,
) -> QueryResult<Vec<CollectionSource>> {
    let invalid = || QueryError::invalid("from", "Expected a reference to a collection");

    let references: Vec<&FieldValue> = match value {
        Some(FieldValue::Array(items)) if !items.is_empty() => items.iter().collect(),
        Some(single @ FieldValue::Reference(_)) => vec![single],
        _ => return Err(invalid()),
    };

    references
        .into_iter()
        .map(|value| match value.as_reference() {
            Some(reference) if reference.is_collection() => Ok(CollectionSource {
                reference: reference.clone(),
                all_descendants,
            }),
            _ => Err(invalid()),
        })
        .collect()
}

/// Offsets and limits travel as int32 on the wire.
///
/// Doubles without a fractional part count as integers, as in the encoder.
fn parse_count(argument: &'static str, value: &FieldValue) -> QueryResult<u32> {
    let integer = match value {
        FieldValue::Double(d) if d.is_finite() && d.fract() == 0.0 => Some(*d as i64),
        other => other.as_integer(),
    };
    integer
        .filter(|i| (0..=i64::from(i32::MAX)).contains(i))
        .map(|i| i as u32)
        .ok_or_else(|| QueryError::invalid(argument, "Expected an integer that is greater than 0"))
}
