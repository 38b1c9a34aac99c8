//! Structured-query wire schema
//!
//! Optional parts are omitted, never serialized as null:
//!
//! ```text
//! {
//!   "structuredQuery": {
//!     "select"?:  { "fields": [{ "fieldPath" }] },
//!     "from":     [{ "collectionId", "allDescendants"? }],
//!     "where"?:   { "fieldFilter" | "unaryFilter" | "compositeFilter" },
//!     "orderBy"?: [{ "field": { "fieldPath" }, "direction" }],
//!     "startAt"?: { "values": [...], "before": true },
//!     "endAt"?:   { "values": [...], "before": true },
//!     "offset"?:  integer,
//!     "limit"?:   integer
//!   }
//! }
//! ```

use serde::Serialize;

use super::cursor::Cursor;
use super::filter::Filter;
use super::order::Order;

/// `{"fieldPath": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReference {
    pub field_path: String,
}

impl FieldReference {
    pub fn new(field_path: impl Into<String>) -> Self {
        Self {
            field_path: field_path.into(),
        }
    }
}

/// Selected fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub fields: Vec<FieldReference>,
}

/// One source collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSelector {
    pub collection_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_descendants: Option<bool>,
}

/// The compiled query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<Projection>,
    pub from: Vec<CollectionSelector>,
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order_by: Vec<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<Cursor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<Cursor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Body of a runQuery request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunQueryRequest {
    pub structured_query: StructuredQuery,
}
