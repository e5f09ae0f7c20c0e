//! Validation errors raised before a request reaches the store

use thiserror::Error;

/// A required request field was absent or empty
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Both question and answer are required")]
    MissingQuestionOrAnswer,

    #[error("Question is required to delete a flashcard")]
    MissingQuestion,
}
