//! Decoded documents
//!
//! Turns a raw wire document (`{name, fields, createTime, updateTime}`)
//! into a [`Document`] with native [`crate::value::FieldValue`] fields.

mod decode;
mod document;
mod errors;
mod read;

pub use decode::decode_value;
pub use document::Document;
pub use errors::{DocumentError, DocumentResult, ReadError, ReadResult};
