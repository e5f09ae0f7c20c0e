//! REST API for the flashcard service

mod flashcards;
mod routes;

pub use flashcards::*;
pub use routes::*;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::ValidationError;

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            error: ErrorBody {
                code: code.to_string(),
                message: message.to_string(),
            },
        }
    }
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    /// Carries the client-facing message only; the store error is logged.
    DatabaseError(String),
}

impl AppError {
    /// Log a store failure and replace it with a fixed message
    pub fn database(action: &str) -> impl FnOnce(sqlx::Error) -> AppError + '_ {
        move |err| {
            tracing::error!("Error {}: {}", action, err);
            AppError::DatabaseError(format!("An error occurred while {}", action))
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("BAD_REQUEST", &msg),
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ApiError::new("NOT_FOUND", &msg),
            ),
            AppError::DatabaseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("DATABASE_ERROR", &msg),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Application state shared between handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::SqlitePool,
}

impl AppState {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        Self { pool }
    }
}
