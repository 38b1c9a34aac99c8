//! Query compiler, validator and executor
//!
//! [`QueryOptions`] carries the caller's loosely typed configuration.
//! [`Query::new`] validates every option and normalizes the shorthand forms
//! into one representation:
//!
//! - `where`   → [`Filter`] (field, unary or one-level `AND` composite)
//! - `orderBy` → list of [`Order`]
//! - `startAt`/`endAt` → [`Cursor`]
//!
//! A `Query` compiles to the structured-query wire schema
//! ([`StructuredQuery`]) and runs against `<parent>:runQuery`.

mod cursor;
mod errors;
mod executor;
mod filter;
mod options;
mod order;
mod query;
mod wire;

pub use cursor::Cursor;
pub use errors::{QueryError, QueryResult};
pub use executor::RUN_QUERY_SUFFIX;
pub use filter::{
    CompositeFilter, CompositeOperator, FieldFilter, FieldOperator, Filter, UnaryFilter,
    UnaryOperator,
};
pub use options::QueryOptions;
pub use order::{Direction, Order};
pub use query::{CollectionSource, Query};
pub use wire::{CollectionSelector, FieldReference, Projection, RunQueryRequest, StructuredQuery};
