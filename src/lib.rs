//! firestore-lite - a strict query compiler and REST client for
//! Firestore-style document stores
//!
//! ```ignore
//! use firestore_lite::database::{Database, DatabaseConfig};
//! use firestore_lite::query::QueryOptions;
//!
//! let db = Database::new(DatabaseConfig::new("my-project"))?;
//! let users = db.reference("users");
//! let query = users.query(
//!     QueryOptions::new()
//!         .filter(vec!["age".into(), ">=".into(), 18.into()] as Vec<FieldValue>)
//!         .order_by("age")
//!         .limit(10),
//! )?;
//! let documents = query.run().await?;
//! ```

pub mod cli;
pub mod database;
pub mod document;
pub mod observability;
pub mod path;
pub mod query;
pub mod value;

pub use database::{Database, DatabaseConfig, Reference};
pub use document::Document;
pub use path::Address;
pub use query::{Query, QueryError, QueryOptions, QueryResult};
pub use value::FieldValue;
