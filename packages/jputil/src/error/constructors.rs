//! Constructor functions for `JpUtilError`

use super::types::JpUtilError;

impl JpUtilError {
    /// Creates an invalid slice error
    ///
    /// # Examples
    /// ```
    /// use jputil::error::{ErrorKind, JpUtilError};
    ///
    /// let error = JpUtilError::invalid_slice("step cannot be 0");
    /// assert_eq!(error.kind(), ErrorKind::InvalidSlice);
    /// assert_eq!(error.to_string(), "Invalid slice, step cannot be 0");
    /// ```
    pub fn invalid_slice(reason: impl Into<String>) -> Self {
        Self::InvalidSlice {
            reason: reason.into(),
        }
    }

    /// Creates a malformed slice expression error
    ///
    /// # Arguments
    /// * `expression` - The slice text that failed to parse
    /// * `reason` - Why the text was rejected
    pub fn malformed_slice(expression: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedSlice {
            expression: expression.into(),
            reason: reason.into(),
        }
    }

    /// The zero-step rejection raised by slice normalization
    #[must_use]
    pub fn zero_step() -> Self {
        Self::invalid_slice("step cannot be 0")
    }
}
