//! Typed-array coercion for function arguments
//!
//! Functions such as `sum`, `avg` or `join` need an array whose elements are
//! all numbers or all strings. Coercion succeeds only on an exact match:
//! a numeric-looking string is not a number. Failure is an expected branch
//! for the caller, so it is reported as `None` rather than an error, and a
//! partially converted array is never returned.

use serde_json::Value;

/// Scalar element type requested from [`coerce_array`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Number,
    String,
}

/// A homogeneous array produced by [`coerce_array`]
#[derive(Debug, Clone, PartialEq)]
pub enum TypedArray<'a> {
    Numbers(Vec<f64>),
    /// Strings borrow from the coerced value
    Strings(Vec<&'a str>),
}

impl<'a> TypedArray<'a> {
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Numbers(_) => ElementKind::Number,
            Self::Strings(_) => ElementKind::String,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Numbers(n) => n.len(),
            Self::Strings(s) => s.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn into_numbers(self) -> Option<Vec<f64>> {
        match self {
            Self::Numbers(n) => Some(n),
            Self::Strings(_) => None,
        }
    }

    #[must_use]
    pub fn into_strings(self) -> Option<Vec<&'a str>> {
        match self {
            Self::Strings(s) => Some(s),
            Self::Numbers(_) => None,
        }
    }
}

/// Coerce an array value into a typed array of `kind`
///
/// Returns `None` if `value` is not an array or any element is not of the
/// requested kind. An empty array coerces to an empty typed array.
#[must_use]
pub fn coerce_array(value: &Value, kind: ElementKind) -> Option<TypedArray<'_>> {
    match kind {
        ElementKind::Number => to_array_num(value).map(TypedArray::Numbers),
        ElementKind::String => to_array_str(value).map(TypedArray::Strings),
    }
}

/// Convert an array of numbers into `Vec<f64>`
#[must_use]
pub fn to_array_num(value: &Value) -> Option<Vec<f64>> {
    let Value::Array(arr) = value else {
        return None;
    };
    arr.iter()
        .map(|element| match element {
            Value::Number(n) => n.as_f64(),
            _ => None,
        })
        .collect()
}

/// Convert an array of strings into borrowed `&str` slices
#[must_use]
pub fn to_array_str(value: &Value) -> Option<Vec<&str>> {
    let Value::Array(arr) = value else {
        return None;
    };
    arr.iter().map(Value::as_str).collect()
}
