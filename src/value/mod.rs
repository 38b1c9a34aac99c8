//! Native field values and their wire encoding
//!
//! [`FieldValue`] is what callers hand to a query (filter values, cursors,
//! option arguments) and what decoded documents hand back. [`encode`] maps
//! the scalar subset onto the wire's tagged [`TypedValue`].

mod errors;
mod field_value;
mod typed;

pub use errors::{ValueError, ValueResult};
pub use field_value::{FieldValue, REFERENCE_KEY};
pub use typed::{encode, encode_array, ArrayValue, TypedValue, WireDouble};
