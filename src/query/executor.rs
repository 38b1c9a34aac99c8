//! Query execution
//!
//! One POST per run to `<parent of the first source>:runQuery`. The
//! response is a JSON array; elements without a `document` only carry a
//! `readTime` and are skipped.

use serde_json::Value as JsonValue;

use super::errors::{QueryError, QueryResult};
use super::query::Query;
use crate::database::FetchRequest;
use crate::document::{Document, DocumentResult};
use crate::observability::{log_event_with_fields, Event};

/// Suffix of the query method on a parent resource
pub const RUN_QUERY_SUFFIX: &str = ":runQuery";

impl Query {
    /// URL the query is sent to
    pub fn endpoint(&self) -> QueryResult<String> {
        let source = self
            .collections()
            .first()
            .ok_or_else(|| QueryError::invalid("from", "Expected a reference to a collection"))?;
        let parent = source.reference.parent()?;
        Ok(format!("{}{}", parent.endpoint(), RUN_QUERY_SUFFIX))
    }

    /// Execute the query and decode the matching documents in order
    pub async fn run(&self) -> QueryResult<Vec<Document>> {
        let endpoint = self.endpoint()?;
        let body = self.to_json()?;
        let db = self.collections()[0].reference.database();

        log_event_with_fields(Event::QueryRunStart, &[("endpoint", endpoint.as_str())]);

        let result = match db.transport().fetch(&endpoint, FetchRequest::post(body)).await {
            Ok(response) => decode_response(&response, |raw| Document::decode(raw, db)),
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(documents) => {
                let count = documents.len().to_string();
                log_event_with_fields(
                    Event::QueryRunComplete,
                    &[("documents", count.as_str()), ("endpoint", endpoint.as_str())],
                );
                Ok(documents)
            }
            Err(e) => {
                let message = e.to_string();
                log_event_with_fields(
                    Event::QueryRunFailed,
                    &[
                        ("code", e.code()),
                        ("endpoint", endpoint.as_str()),
                        ("message", message.as_str()),
                    ],
                );
                Err(e)
            }
        }
    }
}

fn decode_response<T>(
    response: &JsonValue,
    decode: impl Fn(&JsonValue) -> DocumentResult<T>,
) -> QueryResult<Vec<T>> {
    let items = response
        .as_array()
        .ok_or_else(|| QueryError::UnexpectedResponse(format!("expected an array, got {}", response)))?;

    items
        .iter()
        .filter_map(|item| item.get("document"))
        .map(|raw| decode(raw).map_err(QueryError::from))
        .collect()
}
