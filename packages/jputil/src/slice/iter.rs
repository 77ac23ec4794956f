//! Lazy index walk over a normalized slice

use std::iter::FusedIterator;

use serde_json::Value;

use super::normalize::{NormalizedSlice, normalize_slice_params};
use super::params::SliceParams;
use crate::error::JpUtilResult;

/// Iterator over the indices selected by a [`NormalizedSlice`]
///
/// The walk is finite and restartable: clone the iterator, or call
/// [`NormalizedSlice::indices`] again, to start over. A step that would
/// overflow `i64` ends the walk, and so does a negative index, which a
/// hand-built `NormalizedSlice` can contain.
#[derive(Debug, Clone)]
pub struct SliceIndices {
    next: Option<i64>,
    stop: i64,
    step: i64,
}

impl SliceIndices {
    pub(crate) fn new(slice: NormalizedSlice) -> Self {
        Self {
            next: Some(slice.start),
            stop: slice.stop,
            step: slice.step,
        }
    }

    fn in_bounds(&self, index: i64) -> bool {
        if self.step > 0 {
            index < self.stop
        } else {
            index > self.stop
        }
    }

    fn remaining(&self) -> usize {
        let Some(current) = self.next else {
            return 0;
        };
        if current < 0 || !self.in_bounds(current) {
            return 0;
        }
        // A reverse walk ends at the first negative index
        let stop = if self.step > 0 { self.stop } else { self.stop.max(-1) };
        let distance = current.abs_diff(stop);
        let count = (distance - 1) / self.step.unsigned_abs() + 1;
        usize::try_from(count).unwrap_or(usize::MAX)
    }
}

impl Iterator for SliceIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.next?;
        let index = match usize::try_from(current) {
            Ok(index) if self.in_bounds(current) => index,
            _ => {
                self.next = None;
                return None;
            }
        };
        self.next = current.checked_add(self.step);
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SliceIndices {}

impl FusedIterator for SliceIndices {}

/// Slice a sequence with Python-style `[start:stop:step]` semantics
///
/// The result is a freshly allocated vector of cloned elements.
///
/// ```
/// use jputil::{SliceParams, slice};
/// use serde_json::json;
///
/// let items = [json!(0), json!(1), json!(2), json!(3), json!(4)];
/// let params: SliceParams = "-2::-1".parse().expect("valid slice");
/// let picked = slice(&items, &params).expect("non-zero step");
/// assert_eq!(picked, [json!(3), json!(2), json!(1), json!(0)]);
/// ```
///
/// # Errors
///
/// Returns [`crate::JpUtilError::InvalidSlice`] if the step is specified as `0`.
pub fn slice(sequence: &[Value], params: &SliceParams) -> JpUtilResult<Vec<Value>> {
    let normalized = normalize_slice_params(sequence.len(), params)?;
    Ok(materialize(sequence, &normalized, |_| {}))
}

/// Clone the elements a normalized slice selects, calling `on_index` for
/// every index visited
pub(crate) fn materialize(
    sequence: &[Value],
    normalized: &NormalizedSlice,
    mut on_index: impl FnMut(usize),
) -> Vec<Value> {
    let mut result = Vec::with_capacity(normalized.len());
    for index in normalized.indices() {
        on_index(index);
        if let Some(element) = sequence.get(index) {
            result.push(element.clone());
        }
    }
    result
}
