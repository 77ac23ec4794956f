//! Default resolution and index clamping for slice parameters

use super::iter::SliceIndices;
use super::params::SliceParams;
use crate::error::{JpUtilError, JpUtilResult};

/// Slice bounds resolved against a concrete sequence length
///
/// `start` and `stop` may be `-1` for a reverse walk, meaning "before the
/// first element". A forward walk never sees a negative bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NormalizedSlice {
    pub start: i64,
    pub stop: i64,
    pub step: i64,
}

impl NormalizedSlice {
    /// Lazily walk the selected indices
    #[must_use]
    pub fn indices(&self) -> SliceIndices {
        SliceIndices::new(*self)
    }

    /// Number of indices the walk yields
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn is_reverse(&self) -> bool {
        self.step < 0
    }
}

/// Resolve `[start:stop:step]` against a sequence of `length` elements
///
/// An unspecified step is `1`; an explicit step of `0` is the only error.
/// Unspecified bounds default by direction: `0..length` when stepping
/// forward, `length - 1` down to `-1` when stepping backward. Only explicit
/// bounds go through [`cap_index`].
///
/// # Errors
///
/// Returns [`JpUtilError::InvalidSlice`] if the step is specified as `0`.
pub fn normalize_slice_params(
    length: usize,
    params: &SliceParams,
) -> JpUtilResult<NormalizedSlice> {
    let len = saturating_len(length);

    let step = match params.step.value() {
        None => 1,
        Some(0) => return Err(JpUtilError::zero_step()),
        Some(n) => n,
    };
    let negative_step = step < 0;

    let start = match params.start.value() {
        None if negative_step => len - 1,
        None => 0,
        Some(n) => cap_index(length, n, step),
    };

    let stop = match params.stop.value() {
        None if negative_step => -1,
        None => len,
        Some(n) => cap_index(length, n, step),
    };

    Ok(NormalizedSlice { start, stop, step })
}

/// Bring one explicit index into range for a walk in the direction of `step`
///
/// Negative indices count from the end. Indices still below zero clamp to
/// `-1` for a reverse walk (so index 0 is included) and to `0` otherwise.
/// Indices at or past the end clamp to `length - 1` for a reverse walk and to
/// `length` otherwise. Lengths beyond `i64::MAX` saturate.
#[must_use]
pub fn cap_index(length: usize, actual: i64, step: i64) -> i64 {
    let length = saturating_len(length);
    if actual < 0 {
        let adjusted = actual + length;
        if adjusted >= 0 {
            adjusted
        } else if step < 0 {
            -1
        } else {
            0
        }
    } else if actual >= length {
        if step < 0 { length - 1 } else { length }
    } else {
        actual
    }
}

fn saturating_len(length: usize) -> i64 {
    i64::try_from(length).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice::SliceParam;

    fn params(start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> SliceParams {
        SliceParams::new(start, stop, step)
    }

    #[test]
    fn unspecified_params_default_by_direction() {
        let forward = normalize_slice_params(5, &SliceParams::full())
            .expect("full slice should normalize");
        assert_eq!(forward, NormalizedSlice { start: 0, stop: 5, step: 1 });

        let reverse = normalize_slice_params(5, &params(None, None, Some(-1)))
            .expect("reverse slice should normalize");
        assert_eq!(reverse, NormalizedSlice { start: 4, stop: -1, step: -1 });
    }

    #[test]
    fn unspecified_stop_is_not_clamped() {
        // length itself is out of range for a reverse walk, but the forward
        // default of `length` must survive untouched
        let normalized = normalize_slice_params(3, &params(Some(1), None, Some(2)))
            .expect("slice should normalize");
        assert_eq!(normalized.stop, 3);

        let reverse = normalize_slice_params(3, &params(None, None, Some(-2)))
            .expect("slice should normalize");
        assert_eq!(reverse.stop, -1);
    }

    #[test]
    fn explicit_zero_step_is_rejected() {
        let err = normalize_slice_params(4, &params(None, None, Some(0)))
            .expect_err("zero step must fail");
        assert!(err.is_invalid_slice());
        assert_eq!(err.to_string(), "Invalid slice, step cannot be 0");
    }

    #[test]
    fn explicit_zero_is_not_unspecified() {
        let normalized = normalize_slice_params(4, &params(None, Some(0), Some(-1)))
            .expect("slice should normalize");
        assert_eq!(normalized.start, 3);
        assert_eq!(normalized.stop, 0);
        assert_eq!(SliceParam::specified(0).value(), Some(0));
    }

    #[test]
    fn cap_index_negative_indices() {
        assert_eq!(cap_index(5, -1, 1), 4);
        assert_eq!(cap_index(5, -5, 1), 0);
        assert_eq!(cap_index(5, -6, 1), 0);
        assert_eq!(cap_index(5, -6, -1), -1);
        assert_eq!(cap_index(5, i64::MIN, -3), -1);
    }

    #[test]
    fn cap_index_past_the_end() {
        assert_eq!(cap_index(5, 5, 1), 5);
        assert_eq!(cap_index(5, 100, 2), 5);
        assert_eq!(cap_index(5, 5, -1), 4);
        assert_eq!(cap_index(5, i64::MAX, -1), 4);
        assert_eq!(cap_index(0, 0, -1), -1);
    }

    #[test]
    fn cap_index_extreme_lengths_do_not_overflow() {
        assert_eq!(cap_index(usize::MAX, i64::MIN, 1), 0);
        assert_eq!(cap_index(usize::MAX, i64::MIN, -1), -1);
        assert_eq!(cap_index(usize::MAX, -1, 1), i64::MAX - 1);
        assert_eq!(cap_index(usize::MAX, i64::MAX, -1), i64::MAX - 1);
        assert_eq!(cap_index(usize::MAX, i64::MAX, 1), i64::MAX);
    }

    #[test]
    fn cap_index_in_range_is_unchanged() {
        for i in 0..5 {
            assert_eq!(cap_index(5, i, 1), i);
            assert_eq!(cap_index(5, i, -1), i);
        }
    }
}
