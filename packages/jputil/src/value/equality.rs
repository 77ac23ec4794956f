//! Structural deep equality for JMESPath comparisons
//!
//! `serde_json`'s own `PartialEq` distinguishes integer and float
//! representations (`1 != 1.0`). JMESPath numbers have a single numeric
//! type, so numbers are compared by exact value here.

use serde_json::{Number, Value};

/// Recursively compare two values for equality
///
/// A null operand is only equal to another null. Arrays compare
/// element-wise in order; objects compare by key set and per-key value,
/// ignoring key order.
#[must_use]
pub fn deep_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| deep_equal(x, y)))
        }
        _ => false,
    }
}

/// Exact numeric equality across integer and float representations
///
/// An integer equals a float only when the float is integral and denotes
/// the same integer, so no precision is lost above 2^53.
fn numbers_equal(a: &Number, b: &Number) -> bool {
    match (exact_integer(a), exact_integer(b)) {
        (Some(x), Some(y)) => x == y,
        (Some(x), None) => b.as_f64().is_some_and(|f| float_equals_integer(f, x)),
        (None, Some(y)) => a.as_f64().is_some_and(|f| float_equals_integer(f, y)),
        (None, None) => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
    }
}

fn exact_integer(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

fn float_equals_integer(f: f64, i: i128) -> bool {
    // [-2^63, 2^64) covers every integer a `Number` can hold
    const LOWER: f64 = -9_223_372_036_854_775_808.0;
    const UPPER: f64 = 18_446_744_073_709_551_616.0;
    #[allow(clippy::cast_possible_truncation)]
    let truncated = f as i128;
    f.fract() == 0.0 && (LOWER..UPPER).contains(&f) && truncated == i
}
