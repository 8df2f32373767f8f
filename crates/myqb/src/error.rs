//! Error types for myqb

use thiserror::Error;

/// Result type alias for statement building
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors surfaced while assembling a statement
#[derive(Debug, Clone, Error)]
pub enum BuildError {
    /// A condition value whose shape does not fit its operator
    #[error("Invalid condition shape: {0}")]
    InvalidCondition(String),

    /// Builder state error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl BuildError {
    /// Create an invalid-condition error
    pub fn invalid_condition(message: impl Into<String>) -> Self {
        Self::InvalidCondition(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is an invalid-condition error
    pub fn is_invalid_condition(&self) -> bool {
        matches!(self, Self::InvalidCondition(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
