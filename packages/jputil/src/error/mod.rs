//! Error handling for jputil
//!
//! Slicing is the only operation with an error path. Coercion and the
//! predicates report failure through their return values instead.

mod constructors;
mod types;

pub use types::{ErrorKind, JpUtilError, JpUtilResult};
