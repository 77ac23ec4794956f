//! Engine configuration
//!
//! Only diagnostics are configurable; the value semantics themselves are
//! fixed. The config deserializes with defaults for any missing field, so an
//! evaluator can embed it in its own configuration file.

use serde::{Deserialize, Serialize};

/// Diagnostic settings for [`crate::SliceEngine`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log slice normalization and rejected coercions at debug level
    pub log_operations: bool,
    /// Emit a trace event for every index visited while slicing
    pub trace_indices: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_operations: true,
            trace_indices: false,
        }
    }
}

impl EngineConfig {
    /// No logging at all
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            log_operations: false,
            trace_indices: false,
        }
    }

    #[must_use]
    pub fn with_log_operations(mut self, enabled: bool) -> Self {
        self.log_operations = enabled;
        self
    }

    #[must_use]
    pub fn with_trace_indices(mut self, enabled: bool) -> Self {
        self.trace_indices = enabled;
        self
    }
}
