//! Document entity

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value as JsonValue};

use super::decode::{decode_fields, parse_timestamp};
use super::errors::{DocumentError, DocumentResult};
use crate::database::{Database, Reference};
use crate::value::FieldValue;

/// A document read from the remote store
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    reference: Reference,
    fields: BTreeMap<String, FieldValue>,
    create_time: Option<DateTime<Utc>>,
    update_time: Option<DateTime<Utc>>,
}

impl Document {
    /// Decode a raw wire document
    pub fn decode(raw: &JsonValue, db: &Database) -> DocumentResult<Self> {
        let name = raw
            .get("name")
            .and_then(JsonValue::as_str)
            .ok_or(DocumentError::MissingName)?;

        let reference = db
            .reference_from_name(name)
            .filter(Reference::is_document)
            .ok_or_else(|| DocumentError::InvalidName(name.to_string()))?;

        let fields = match raw.get("fields") {
            Some(fields) => decode_fields(None, fields, db)?,
            None => BTreeMap::new(),
        };

        Ok(Self {
            reference,
            fields,
            create_time: optional_timestamp(raw, "createTime")?,
            update_time: optional_timestamp(raw, "updateTime")?,
        })
    }

    pub fn id(&self) -> &str {
        self.reference.id()
    }

    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    pub fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }

    /// Top-level field by name
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn create_time(&self) -> Option<DateTime<Utc>> {
        self.create_time
    }

    pub fn update_time(&self) -> Option<DateTime<Utc>> {
        self.update_time
    }

    /// Plain JSON summary: name, fields and timestamps
    pub fn to_json(&self) -> JsonValue {
        let fields: serde_json::Map<String, JsonValue> = self
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect();

        json!({
            "name": self.reference.name(),
            "fields": fields,
            "createTime": self.create_time.map(rfc3339),
            "updateTime": self.update_time.map(rfc3339),
        })
    }
}

fn optional_timestamp(raw: &JsonValue, key: &str) -> DocumentResult<Option<DateTime<Utc>>> {
    match raw.get(key).and_then(JsonValue::as_str) {
        Some(s) => parse_timestamp(s).map(Some),
        None => Ok(None),
    }
}

fn rfc3339(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::DatabaseConfig;

    fn db() -> Database {
        Database::new(DatabaseConfig::new("projectId")).unwrap()
    }

    fn raw_doc() -> JsonValue {
        json!({
            "name": "projects/projectId/databases/(default)/documents/col/AKoa",
            "fields": {
                "title": {"stringValue": "hello"},
                "count": {"integerValue": "3"}
            },
            "createTime": "2019-10-17T16:33:41.217487Z",
            "updateTime": "2019-12-04T10:18:57.882392Z"
        })
    }

    #[test]
    fn test_decode() {
        let doc = Document::decode(&raw_doc(), &db()).unwrap();
        assert_eq!(doc.id(), "AKoa");
        assert_eq!(doc.reference().path(), "col/AKoa");
        assert_eq!(doc.get("title"), Some(&FieldValue::from("hello")));
        assert_eq!(doc.get("count"), Some(&FieldValue::Integer(3)));
        assert!(doc.create_time().unwrap() < doc.update_time().unwrap());
    }

    #[test]
    fn test_decode_without_fields() {
        let raw = json!({"name": "projects/projectId/databases/(default)/documents/col/a"});
        let doc = Document::decode(&raw, &db()).unwrap();
        assert!(doc.fields().is_empty());
        assert!(doc.create_time().is_none());
    }

    #[test]
    fn test_missing_name() {
        let err = Document::decode(&json!({"fields": {}}), &db()).unwrap_err();
        assert_eq!(err, DocumentError::MissingName);
    }

    #[test]
    fn test_collection_name_rejected() {
        let raw = json!({"name": "projects/projectId/databases/(default)/documents/col"});
        let err = Document::decode(&raw, &db()).unwrap_err();
        assert_eq!(err.code(), "DOCUMENT_INVALID_NAME");
    }

    #[test]
    fn test_to_json() {
        let doc = Document::decode(&raw_doc(), &db()).unwrap();
        let out = doc.to_json();
        assert_eq!(out["fields"]["count"], json!(3));
        assert_eq!(out["createTime"], json!("2019-10-17T16:33:41.217487Z"));
    }
}
