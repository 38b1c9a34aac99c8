//! Query execution tests against a recording transport

mod common;

use std::sync::Arc;

use common::RecordingTransport;
use firestore_lite::database::{Database, DatabaseConfig, Method, TransportError};
use firestore_lite::query::{Query, QueryOptions};
use firestore_lite::value::FieldValue;
use serde_json::json;

fn database(transport: Arc<RecordingTransport>) -> Database {
    Database::with_transport(DatabaseConfig::new("projectId"), transport).unwrap()
}

#[tokio::test]
async fn test_sends_request_to_the_right_endpoint() {
    let transport = RecordingTransport::replying(json!([]));
    let db = database(transport.clone());
    let col_ref = db.reference("col");

    let query = Query::new(QueryOptions::new().from(&col_ref)).unwrap();
    query.run().await.unwrap();

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].0,
        format!("{}:runQuery", col_ref.parent().unwrap().endpoint())
    );
    assert_eq!(
        calls[0].0,
        "https://firestore.googleapis.com/v1/projects/projectId/databases/(default)/documents:runQuery"
    );
    assert_eq!(calls[0].1.method, Method::Post);
    assert_eq!(calls[0].1.body, Some(query.to_json().unwrap()));
}

#[tokio::test]
async fn test_nested_collection_endpoint() {
    let transport = RecordingTransport::replying(json!([]));
    let db = database(transport.clone());

    let query = Query::new(QueryOptions::new().from(db.reference("users/u1/posts"))).unwrap();
    query.run().await.unwrap();

    assert_eq!(
        transport.calls()[0].0,
        format!("{}/users/u1:runQuery", db.endpoint())
    );
}

#[tokio::test]
async fn test_returns_documents_in_order() {
    let transport = RecordingTransport::replying(json!([
        {
            "document": {
                "name": "projects/projectId/databases/(default)/documents/col/AKoa",
                "fields": {"age": {"integerValue": "42"}},
                "createTime": "2019-10-17T16:33:41.217487Z",
                "updateTime": "2019-12-04T10:18:57.882392Z"
            },
            "readTime": "2020-03-29T00:17:46.518749Z"
        },
        {
            "document": {
                "name": "projects/projectId/databases/(default)/documents/col/q9YU",
                "fields": {},
                "createTime": "2019-11-13T21:38:41.443294Z",
                "updateTime": "2019-11-13T21:38:41.443294Z"
            },
            "readTime": "2020-03-29T00:17:46.518749Z"
        }
    ]));
    let db = database(transport);

    let documents = Query::new(QueryOptions::new().from(db.reference("col")))
        .unwrap()
        .run()
        .await
        .unwrap();

    let ids: Vec<_> = documents.iter().map(|d| d.id()).collect();
    assert_eq!(ids, vec!["AKoa", "q9YU"]);
    assert_eq!(documents[0].get("age"), Some(&FieldValue::Integer(42)));
    assert_eq!(documents[0].reference(), &db.reference("col/AKoa"));
    assert!(documents[1].fields().is_empty());
}

#[tokio::test]
async fn test_empty_results() {
    let transport =
        RecordingTransport::replying(json!([{"readTime": "2020-06-01T15:45:21.155041Z"}]));
    let db = database(transport);

    let documents = Query::new(QueryOptions::new().from(db.reference("col")))
        .unwrap()
        .run()
        .await
        .unwrap();

    assert!(documents.is_empty());
}

#[tokio::test]
async fn test_transport_errors_propagate() {
    let transport = RecordingTransport::with_result(Err(TransportError::Status {
        status: 403,
        body: "denied".to_string(),
    }));
    let db = database(transport.clone());

    let err = Query::new(QueryOptions::new().from(db.reference("col")))
        .unwrap()
        .run()
        .await
        .unwrap_err();

    assert_eq!(err.code(), "TRANSPORT_BAD_STATUS");
    assert!(!err.is_validation());
    assert_eq!(transport.calls().len(), 1);
}

#[tokio::test]
async fn test_unexpected_response_shape() {
    let transport = RecordingTransport::replying(json!({"error": {"code": 400}}));
    let db = database(transport);

    let err = Query::new(QueryOptions::new().from(db.reference("col")))
        .unwrap()
        .run()
        .await
        .unwrap_err();

    assert_eq!(err.code(), "QUERY_UNEXPECTED_RESPONSE");
}

#[tokio::test]
async fn test_foreign_document_name_is_rejected() {
    let transport = RecordingTransport::replying(json!([
        {"document": {"name": "projects/other/databases/(default)/documents/col/a"}}
    ]));
    let db = database(transport);

    let err = Query::new(QueryOptions::new().from(db.reference("col")))
        .unwrap()
        .run()
        .await
        .unwrap_err();

    assert!(err.to_string().contains("projects/other"));
}

#[tokio::test]
async fn test_run_does_not_change_the_query() {
    let transport = RecordingTransport::replying(json!([]));
    let db = database(transport.clone());

    let query = Query::new(QueryOptions::new().from(db.reference("col")).limit(3)).unwrap();
    let before = query.to_json().unwrap();
    query.run().await.unwrap();
    query.run().await.unwrap();

    assert_eq!(query.to_json().unwrap(), before);
    let calls = transport.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].1.body, calls[1].1.body);
}
