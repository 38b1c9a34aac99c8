//! Database handle, references and the remote transport
//!
//! A [`Database`] knows two prefixes:
//!
//! - the root path (`projects/<p>/databases/<d>/documents`), which forms the
//!   wire identity of a reference
//! - the endpoint prefix (`https://<host>/v1/<root path>`), which forms the
//!   URL a reference is fetched from
//!
//! Requests go through the [`Transport`] collaborator so callers can swap
//! the HTTP client for anything that speaks JSON.

mod config;
mod database;
mod errors;
mod reference;
mod transport;

pub use config::DatabaseConfig;
pub use database::Database;
pub use errors::{ConfigError, ConfigResult, TransportError, TransportResult};
pub use reference::Reference;
pub use transport::{FetchRequest, HttpTransport, Method, Transport};
