//! Remote transport collaborator
//!
//! The query layer never talks HTTP directly. It hands an endpoint and a
//! [`FetchRequest`] to a [`Transport`] and gets parsed JSON back.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::config::DatabaseConfig;
use super::errors::{TransportError, TransportResult};

/// HTTP method of a remote call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single request handed to the transport
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub method: Method,
    pub body: Option<Value>,
}

impl FetchRequest {
    /// POST with a JSON body
    pub fn post(body: Value) -> Self {
        Self {
            method: Method::Post,
            body: Some(body),
        }
    }

    /// GET without a body
    pub fn get() -> Self {
        Self {
            method: Method::Get,
            body: None,
        }
    }
}

/// Sends requests to the remote API.
///
/// Implementations own retry and timeout policy. Errors are surfaced to the
/// caller unchanged.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, endpoint: &str, request: FetchRequest) -> TransportResult<Value>;
}

/// [`Transport`] backed by reqwest
pub struct HttpTransport {
    client: reqwest::Client,
    auth_token: Option<String>,
}

impl HttpTransport {
    /// Build a client honouring the config's timeout and token
    pub fn new(config: &DatabaseConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            client,
            auth_token: config.auth_token.clone(),
        }
    }

    fn method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, endpoint: &str, request: FetchRequest) -> TransportResult<Value> {
        let mut builder = self.client.request(Self::method(request.method), endpoint);

        if let Some(ref token) = self.auth_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| TransportError::Request {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::InvalidJson(e.to_string()))
    }
}
