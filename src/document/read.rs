//! Single-document reads
//!
//! `GET <reference endpoint>` returns the raw document, decoded the same
//! way as query results.

use super::document::Document;
use super::errors::{ReadError, ReadResult};
use crate::database::{FetchRequest, Reference};
use crate::observability::{log_event_with_fields, Event};

impl Reference {
    /// Fetch and decode the document this reference points at
    pub async fn get(&self) -> ReadResult<Document> {
        if !self.is_document() {
            return Err(ReadError::NotADocument(self.path()));
        }

        let endpoint = self.endpoint();
        let result = match self
            .database()
            .transport()
            .fetch(&endpoint, FetchRequest::get())
            .await
        {
            Ok(raw) => Document::decode(&raw, self.database()).map_err(ReadError::from),
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(document) => {
                log_event_with_fields(Event::DocumentRead, &[("endpoint", endpoint.as_str())]);
                Ok(document)
            }
            Err(e) => {
                let message = e.to_string();
                log_event_with_fields(
                    Event::DocumentReadFailed,
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
