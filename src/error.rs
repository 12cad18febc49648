//! Error type shared by the question services

use crate::models::ValidationErrors;
use crate::store::StoreError;

/// Result type for service operations
pub type QuizResult<T> = std::result::Result<T, QuizError>;

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// Lookup miss; callers treat it as a no-op
    #[error("Question not found: {0}")]
    NotFound(String),

    /// Submitted payload broke a field rule; nothing was persisted
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl QuizError {
    /// Field errors when this is a validation failure
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            QuizError::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, QuizError::NotFound(_))
    }
}
