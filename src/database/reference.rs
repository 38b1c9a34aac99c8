//! References: an address bound to a database

use std::fmt;

use super::database::Database;
use crate::path::{Address, PathResult};
use crate::query::{Query, QueryOptions, QueryResult};
use crate::value::FieldValue;

/// A collection or document address inside a specific database
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    address: Address,
    db: Database,
}

impl Reference {
    pub fn new(address: Address, db: Database) -> Self {
        Self { address, db }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Normalized path relative to the database root
    pub fn path(&self) -> String {
        self.address.to_string()
    }

    /// Last path segment
    pub fn id(&self) -> &str {
        self.address.id()
    }

    pub fn is_root(&self) -> bool {
        self.address.is_root()
    }

    pub fn is_collection(&self) -> bool {
        self.address.is_collection()
    }

    pub fn is_document(&self) -> bool {
        self.address.is_document()
    }

    /// Wire identity, used as `referenceValue`
    pub fn name(&self) -> String {
        self.join(self.db.root_path())
    }

    /// URL of this reference
    pub fn endpoint(&self) -> String {
        self.join(self.db.endpoint())
    }

    pub fn parent(&self) -> PathResult<Self> {
        Ok(Self::new(self.address.parent()?, self.db.clone()))
    }

    pub fn parent_collection(&self) -> PathResult<Self> {
        Ok(Self::new(self.address.parent_collection()?, self.db.clone()))
    }

    pub fn child(&self, path: &str) -> Self {
        Self::new(self.address.child(path), self.db.clone())
    }

    /// Query over this collection.
    ///
    /// `options.from` wins when the caller sets it explicitly.
    pub fn query(&self, mut options: QueryOptions) -> QueryResult<Query> {
        if options.from.is_none() {
            options.from = Some(FieldValue::Reference(self.clone()));
        }
        Query::new(options)
    }

    fn join(&self, prefix: &str) -> String {
        if self.address.is_root() {
            prefix.to_string()
        } else {
            format!("{}/{}", prefix, self.address)
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
