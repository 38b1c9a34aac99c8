//! Shared test transport

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use firestore_lite::database::{FetchRequest, Transport, TransportResult};
use serde_json::Value;

/// Replies with a canned response and records every call
pub struct RecordingTransport {
    response: TransportResult<Value>,
    calls: Mutex<Vec<(String, FetchRequest)>>,
}

impl RecordingTransport {
    pub fn replying(response: Value) -> Arc<Self> {
        Self::with_result(Ok(response))
    }

    pub fn with_result(response: TransportResult<Value>) -> Arc<Self> {
        Arc::new(Self {
            response,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(String, FetchRequest)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn fetch(&self, endpoint: &str, request: FetchRequest) -> TransportResult<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((endpoint.to_string(), request));
        self.response.clone()
    }
}
