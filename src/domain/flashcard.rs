//! Flashcard domain model - the only entity in the service

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// A persisted question/answer pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flashcard {
    /// Store-assigned row id. Lookups never use it.
    pub id: i64,
    pub question: String,
    pub answer: String,
}

/// A flashcard that passed creation checks but has no id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFlashcard {
    pub question: String,
    pub answer: String,
}

impl NewFlashcard {
    pub fn with_id(self, id: i64) -> Flashcard {
        Flashcard {
            id,
            question: self.question,
            answer: self.answer,
        }
    }
}

/// Request body for `POST /api/flashcards`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFlashcardRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

impl CreateFlashcardRequest {
    /// Both fields must be present and non-empty.
    pub fn validate(self) -> Result<NewFlashcard, ValidationError> {
        match (present(self.question), present(self.answer)) {
            (Some(question), Some(answer)) => Ok(NewFlashcard { question, answer }),
            _ => Err(ValidationError::MissingQuestionOrAnswer),
        }
    }
}

/// Request body for `PUT /api/flashcards`
///
/// Nothing is validated here: a missing `oldQuestion` simply matches no row,
/// and missing replacement values are left for the store to reject.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFlashcardRequest {
    #[serde(default)]
    pub old_question: Option<String>,
    #[serde(default)]
    pub new_question: Option<String>,
    #[serde(default)]
    pub new_answer: Option<String>,
}

/// Request body for `DELETE /api/flashcards`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFlashcardRequest {
    #[serde(default)]
    pub question: Option<String>,
}

impl DeleteFlashcardRequest {
    pub fn validate(self) -> Result<String, ValidationError> {
        present(self.question).ok_or(ValidationError::MissingQuestion)
    }
}

/// Acknowledgment body for update and delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// Whitespace counts as present; only absent or "" fail.
fn present(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}
