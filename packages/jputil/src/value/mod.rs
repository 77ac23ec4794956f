//! JMESPath value semantics over `serde_json::Value`
//!
//! - Truthiness: which values count as false in conditions and filters
//! - Deep equality: structural comparison used by `==` and `!=`
//! - Coercion: typed views of arrays for functions that take
//!   `array[number]` or `array[string]` arguments

mod coercion;
mod equality;
mod ext;
mod truthiness;

pub use coercion::{ElementKind, TypedArray, coerce_array, to_array_num, to_array_str};
pub use equality::deep_equal;
pub use ext::ValueExt;
pub use truthiness::{is_falsy, is_truthy};
