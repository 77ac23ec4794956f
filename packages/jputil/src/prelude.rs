//! jputil prelude
//!
//! The types evaluator code needs to call the helpers.

pub use crate::config::EngineConfig;
pub use crate::engine::SliceEngine;
pub use crate::error::{JpUtilError, JpUtilResult};
pub use crate::slice::{SliceParam, SliceParams};
pub use crate::value::{ElementKind, TypedArray, ValueExt};
