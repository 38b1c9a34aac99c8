//! Database configuration
//!
//! Loaded from a JSON file; every field except `project_id` has a default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{ConfigError, ConfigResult};

/// Connection settings for one remote database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Project identifier (required)
    pub project_id: String,

    /// Database identifier (default: "(default)")
    #[serde(default = "default_database_id")]
    pub database_id: String,

    /// API host (default: "firestore.googleapis.com")
    #[serde(default = "default_host")]
    pub host: String,

    /// Use https (default: true)
    #[serde(default = "default_ssl")]
    pub ssl: bool,

    /// Bearer token sent with every request
    #[serde(default)]
    pub auth_token: Option<String>,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_database_id() -> String {
    "(default)".to_string()
}

fn default_host() -> String {
    "firestore.googleapis.com".to_string()
}

fn default_ssl() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    30
}

impl DatabaseConfig {
    /// Config for `project_id` with every other field defaulted
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            database_id: default_database_id(),
            host: default_host(),
            ssl: default_ssl(),
            auth_token: None,
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Point the config at another host, e.g. a local emulator
    pub fn with_host(mut self, host: impl Into<String>, ssl: bool) -> Self {
        self.host = host.into();
        self.ssl = ssl;
        self
    }

    /// Attach a bearer token
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Load and validate configuration from a JSON file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: DatabaseConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that cannot address a database
    pub fn validate(&self) -> ConfigResult<()> {
        if self.project_id.trim().is_empty() {
            return Err(ConfigError::Invalid("project_id must not be empty".into()));
        }
        if self.database_id.trim().is_empty() {
            return Err(ConfigError::Invalid("database_id must not be empty".into()));
        }
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid("host must not be empty".into()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be > 0".into()));
        }
        Ok(())
    }

    /// `projects/<p>/databases/<d>/documents`
    pub fn root_path(&self) -> String {
        format!(
            "projects/{}/databases/{}/documents",
            self.project_id, self.database_id
        )
    }

    /// `http(s)://<host>/v1/<root path>`
    pub fn endpoint(&self) -> String {
        let scheme = if self.ssl { "https" } else { "http" };
        format!("{}://{}/v1/{}", scheme, self.host, self.root_path())
    }
}
