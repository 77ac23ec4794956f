//! Python-style `[start:stop:step]` slicing
//!
//! Slicing happens in three stages:
//! 1. The evaluator builds [`SliceParams`] from the parsed expression (or
//!    parses slice text with [`str::parse`]).
//! 2. [`normalize_slice_params`] resolves defaults and clamps indices
//!    against the sequence length, producing a [`NormalizedSlice`].
//! 3. The normalized slice walks its indices lazily ([`SliceIndices`]) and
//!    [`slice`] materializes the selected elements.

mod iter;
mod normalize;
mod params;

pub(crate) use iter::materialize;
pub use iter::{SliceIndices, slice};
pub use normalize::{NormalizedSlice, cap_index, normalize_slice_params};
pub use params::{SliceParam, SliceParams};
