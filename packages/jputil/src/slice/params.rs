//! Slice parameters as written in a slice expression
//!
//! Each axis is either specified or left to its default. An omitted axis is
//! not the same as an explicit `0`, so a parameter carries no number at all
//! when unspecified.

use std::fmt;
use std::str::FromStr;

use crate::error::JpUtilError;

/// One part (start, stop or step) of a slice expression
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SliceParam(Option<i64>);

impl SliceParam {
    #[inline]
    #[must_use]
    pub const fn specified(n: i64) -> Self {
        Self(Some(n))
    }

    #[inline]
    #[must_use]
    pub const fn unspecified() -> Self {
        Self(None)
    }

    #[inline]
    #[must_use]
    pub const fn is_specified(&self) -> bool {
        self.0.is_some()
    }

    /// The explicit value, if one was written
    #[inline]
    #[must_use]
    pub const fn value(&self) -> Option<i64> {
        self.0
    }
}

impl From<Option<i64>> for SliceParam {
    fn from(value: Option<i64>) -> Self {
        Self(value)
    }
}

impl From<i64> for SliceParam {
    fn from(value: i64) -> Self {
        Self::specified(value)
    }
}

/// The `[start, stop, step]` triple of one slice expression
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SliceParams {
    pub start: SliceParam,
    pub stop: SliceParam,
    pub step: SliceParam,
}

impl SliceParams {
    /// Build params from optional parts, `None` meaning unspecified
    #[must_use]
    pub const fn new(start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Self {
        Self {
            start: SliceParam(start),
            stop: SliceParam(stop),
            step: SliceParam(step),
        }
    }

    /// `[::]`, selecting every element in order
    #[must_use]
    pub const fn full() -> Self {
        Self {
            start: SliceParam::unspecified(),
            stop: SliceParam::unspecified(),
            step: SliceParam::unspecified(),
        }
    }
}

/// Positional `[start, stop, step]`
impl From<[SliceParam; 3]> for SliceParams {
    fn from([start, stop, step]: [SliceParam; 3]) -> Self {
        Self { start, stop, step }
    }
}

impl From<(Option<i64>, Option<i64>, Option<i64>)> for SliceParams {
    fn from((start, stop, step): (Option<i64>, Option<i64>, Option<i64>)) -> Self {
        Self::new(start, stop, step)
    }
}

impl FromStr for SliceParams {
    type Err = JpUtilError;

    /// Parse `start:stop` or `start:stop:step`, each part optional
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() < 2 {
            return Err(JpUtilError::malformed_slice(s, "expected at least one ':'"));
        }
        if parts.len() > 3 {
            return Err(JpUtilError::malformed_slice(
                s,
                format!("expected at most 3 parts, found {}", parts.len()),
            ));
        }

        let mut params = [SliceParam::unspecified(); 3];
        for (slot, part) in params.iter_mut().zip(&parts) {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let n = part.parse::<i64>().map_err(|e| {
                JpUtilError::malformed_slice(s, format!("invalid integer '{part}': {e}"))
            })?;
            *slot = SliceParam::specified(n);
        }
        Ok(Self::from(params))
    }
}

impl fmt::Display for SliceParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, "{n}"),
            None => Ok(()),
        }
    }
}

impl fmt::Display for SliceParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.stop)?;
        if self.step.is_specified() {
            write!(f, ":{}", self.step)?;
        }
        Ok(())
    }
}
