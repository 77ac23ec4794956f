//! # jputil
//!
//! Value semantics for a JMESPath evaluator over `serde_json::Value`.
//!
//! - **Truthiness**: [`is_falsy`] / [`is_truthy`]
//! - **Deep equality**: [`deep_equal`], comparing numbers by value
//! - **Slicing**: [`slice`] with Python-style `[start:stop:step]` defaults,
//!   negative indices and out-of-range clamping
//! - **Typed coercion**: [`coerce_array`] for `array[number]` and
//!   `array[string]` function arguments
//!
//! The evaluator owns parsing and evaluation; this crate only supplies the
//! contracts those stages call into. Every operation is pure and safe to
//! call from any thread.
//!
//! ## Usage
//!
//! ```
//! use jputil::{SliceEngine, SliceParams};
//! use serde_json::json;
//!
//! let engine = SliceEngine::new();
//! let items = [json!(0), json!(1), json!(2), json!(3), json!(4)];
//!
//! let params = SliceParams::new(Some(1), Some(4), None);
//! let picked = engine.slice(&items, &params).expect("valid slice");
//! assert_eq!(picked, [json!(1), json!(2), json!(3)]);
//!
//! let zero_step: SliceParams = "::0".parse().expect("parses");
//! assert!(engine.slice(&items, &zero_step).is_err());
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod engine;
pub mod error;
pub mod prelude;
pub mod slice;
pub mod value;

pub use config::EngineConfig;
pub use engine::SliceEngine;
pub use error::{ErrorKind, JpUtilError, JpUtilResult};
pub use slice::{
    NormalizedSlice, SliceIndices, SliceParam, SliceParams, cap_index, normalize_slice_params,
    slice,
};
pub use value::{
    ElementKind, TypedArray, ValueExt, coerce_array, deep_equal, is_falsy, is_truthy,
    to_array_num, to_array_str,
};
