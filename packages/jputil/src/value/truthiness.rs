//! JMESPath truthiness
//!
//! False values are: an empty string, array or object, the boolean
//! `false`, and `null`. Every number is true, zero included.

use serde_json::Value;

/// Determine if a value is false under JMESPath rules
#[inline]
#[must_use]
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Array(arr) => arr.is_empty(),
        Value::Object(obj) => obj.is_empty(),
        Value::Number(_) => false,
    }
}

#[inline]
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    !is_falsy(value)
}
