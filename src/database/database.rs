//! Shared database handle

use std::fmt;
use std::sync::Arc;

use super::config::DatabaseConfig;
use super::errors::ConfigResult;
use super::reference::Reference;
use super::transport::{HttpTransport, Transport};
use crate::path::{Address, SEPARATOR};
use crate::query::{Query, QueryOptions, QueryResult};
use crate::value::FieldValue;

struct Inner {
    config: DatabaseConfig,
    root_path: String,
    endpoint: String,
    transport: Arc<dyn Transport>,
}

/// Handle to one remote database.
///
/// Cloning is cheap; all clones share the same configuration and transport.
#[derive(Clone)]
pub struct Database {
    inner: Arc<Inner>,
}

impl Database {
    /// Database reached over HTTP
    pub fn new(config: DatabaseConfig) -> ConfigResult<Self> {
        let transport = Arc::new(HttpTransport::new(&config));
        Self::with_transport(config, transport)
    }

    /// Database reached through a custom transport
    pub fn with_transport(
        config: DatabaseConfig,
        transport: Arc<dyn Transport>,
    ) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            inner: Arc::new(Inner {
                root_path: config.root_path(),
                endpoint: config.endpoint(),
                config,
                transport,
            }),
        })
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.inner.config
    }

    /// Prefix of every reference-value string
    pub fn root_path(&self) -> &str {
        &self.inner.root_path
    }

    /// Prefix of every request URL
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    pub fn transport(&self) -> &dyn Transport {
        self.inner.transport.as_ref()
    }

    /// Reference to `path` in this database
    pub fn reference(&self, path: &str) -> Reference {
        Reference::new(Address::parse(path), self.clone())
    }

    /// Reference for a full resource name (`projects/.../documents/col/doc`).
    ///
    /// Returns `None` when the name belongs to another database.
    pub fn reference_from_name(&self, name: &str) -> Option<Reference> {
        let rest = name.strip_prefix(self.root_path())?;
        if !rest.is_empty() && !rest.starts_with(SEPARATOR) {
            return None;
        }
        Some(self.reference(rest))
    }

    /// Validate `options` into a query against this database.
    ///
    /// `from` may name collections by path (`"users"`, `["a", "b/c/d"]`);
    /// paths resolve to references in this database before validation.
    pub fn query(&self, mut options: QueryOptions) -> QueryResult<Query> {
        options.from = options.from.map(|from| self.resolve_paths(from));
        Query::new(options)
    }

    fn resolve_paths(&self, value: FieldValue) -> FieldValue {
        match value {
            FieldValue::String(path) => FieldValue::Reference(self.reference(&path)),
            FieldValue::Array(items) => FieldValue::Array(
                items.into_iter().map(|item| self.resolve_paths(item)).collect(),
            ),
            other => other,
        }
    }
}

impl PartialEq for Database {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || (self.inner.root_path == other.inner.root_path
                && self.inner.endpoint == other.inner.endpoint)
    }
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database")
            .field("root_path", &self.inner.root_path)
            .field("endpoint", &self.inner.endpoint)
            .finish()
    }
}
