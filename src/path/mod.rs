//! Path model for document-store addresses
//!
//! An address is an ordered list of non-empty segments. The parity of the
//! segment count decides what the address points at:
//!
//! - odd  → collection (`users`, `users/alice/posts`)
//! - even → document   (`users/alice`)
//!
//! The root address has no segments and no parent.

mod address;
mod errors;

pub use address::{Address, SEPARATOR};
pub use errors::{PathError, PathResult};
