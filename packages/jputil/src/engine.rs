//! `SliceEngine`: the value helpers behind one configurable handle
//!
//! The engine holds no state beyond its config. Every operation is pure and
//! the engine is `Send + Sync`, so one instance can serve many evaluator
//! threads.

use serde_json::Value;

use crate::config::EngineConfig;
use crate::error::JpUtilResult;
use crate::slice::{NormalizedSlice, SliceParams, materialize, normalize_slice_params};
use crate::value::{ElementKind, TypedArray, coerce_array, deep_equal, is_falsy};

/// Entry point for evaluator code that wants diagnostics around the helpers
#[derive(Debug, Clone, Default)]
pub struct SliceEngine {
    config: EngineConfig,
}

impl SliceEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn is_falsy(&self, value: &Value) -> bool {
        is_falsy(value)
    }

    #[inline]
    #[must_use]
    pub fn deep_equal(&self, left: &Value, right: &Value) -> bool {
        deep_equal(left, right)
    }

    /// Resolve slice params against `length`, logging the outcome
    ///
    /// # Errors
    ///
    /// Returns `InvalidSlice` if the step is specified as `0`.
    pub fn normalize(
        &self,
        length: usize,
        params: &SliceParams,
    ) -> JpUtilResult<NormalizedSlice> {
        match normalize_slice_params(length, params) {
            Ok(normalized) => {
                if self.config.log_operations {
                    log::debug!(
                        "Slice [{params}] over {length} elements normalized to {}:{}:{}",
                        normalized.start,
                        normalized.stop,
                        normalized.step
                    );
                }
                Ok(normalized)
            }
            Err(e) => {
                if self.config.log_operations {
                    log::warn!("Rejected slice [{params}]: {e}");
                }
                Err(e)
            }
        }
    }

    /// Slice `sequence` with `[start:stop:step]` semantics
    ///
    /// # Errors
    ///
    /// Returns `InvalidSlice` if the step is specified as `0`.
    pub fn slice(&self, sequence: &[Value], params: &SliceParams) -> JpUtilResult<Vec<Value>> {
        let normalized = self.normalize(sequence.len(), params)?;
        let trace_indices = self.config.trace_indices;
        Ok(materialize(sequence, &normalized, |index| {
            if trace_indices {
                tracing::trace!(index, "slice visiting index");
            }
        }))
    }

    #[must_use]
    pub fn coerce_array<'a>(&self, value: &'a Value, kind: ElementKind) -> Option<TypedArray<'a>> {
        let coerced = coerce_array(value, kind);
        if coerced.is_none() && self.config.log_operations {
            log::debug!(
                "Value of type {} does not coerce to array[{kind:?}]",
                type_name(value)
            );
        }
        coerced
    }
}

/// JMESPath type name, as reported by the `type()` function
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
