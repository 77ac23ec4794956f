//! Fluent access to JMESPath value semantics on `serde_json::Value`

use serde_json::Value;

use super::{deep_equal, is_falsy};

/// Extension methods for evaluator code working with `serde_json::Value`
///
/// ```
/// use jputil::ValueExt;
/// use serde_json::json;
///
/// assert!(json!([]).is_falsy());
/// assert!(json!(0).is_truthy());
/// assert!(json!({"a": 1}).deep_eq(&json!({"a": 1.0})));
/// ```
pub trait ValueExt {
    fn is_falsy(&self) -> bool;

    fn is_truthy(&self) -> bool {
        !self.is_falsy()
    }

    fn deep_eq(&self, other: &Value) -> bool;
}

impl ValueExt for Value {
    #[inline]
    fn is_falsy(&self) -> bool {
        is_falsy(self)
    }

    #[inline]
    fn deep_eq(&self, other: &Value) -> bool {
        deep_equal(self, other)
    }
}
