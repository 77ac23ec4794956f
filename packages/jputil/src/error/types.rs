//! Core error types for slicing and slice-expression parsing.

/// Coarse classification of a [`JpUtilError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A slice whose parameters cannot be evaluated (step of zero)
    InvalidSlice,
    /// Slice expression text that does not parse as `start:stop:step`
    MalformedSlice,
}

/// Main jputil error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JpUtilError {
    #[error("Invalid slice, {reason}")]
    InvalidSlice { reason: String },

    #[error("Malformed slice expression '{expression}': {reason}")]
    MalformedSlice { expression: String, reason: String },
}

/// Result type for jputil operations
pub type JpUtilResult<T> = Result<T, JpUtilError>;

impl JpUtilError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidSlice { .. } => ErrorKind::InvalidSlice,
            Self::MalformedSlice { .. } => ErrorKind::MalformedSlice,
        }
    }

    #[must_use]
    pub fn is_invalid_slice(&self) -> bool {
        self.kind() == ErrorKind::InvalidSlice
    }
}
