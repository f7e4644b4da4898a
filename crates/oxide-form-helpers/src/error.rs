//! Error types for form helpers.

use thiserror::Error;

/// Form helper errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A helper was invoked in a way it does not support, such as a
    /// fieldset without a content block.
    #[error("invalid usage: {0}")]
    InvalidUsage(String),
}

impl FormError {
    /// Creates an `InvalidUsage` error.
    pub fn invalid_usage(message: impl Into<String>) -> Self {
        Self::InvalidUsage(message.into())
    }
}

/// Result type alias for form helper operations.
pub type Result<T> = std::result::Result<T, FormError>;
