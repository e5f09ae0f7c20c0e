//! Flashcard API routes
//!
//! All four operations share one path and carry their arguments in the JSON
//! body, including DELETE.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};

use crate::db;
use crate::domain::{
    CreateFlashcardRequest, DeleteFlashcardRequest, Flashcard, MessageResponse,
    UpdateFlashcardRequest,
};

use super::{AppError, AppState};

/// Create flashcard routes
pub fn flashcard_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(list_flashcards)
            .post(create_flashcard)
            .put(update_flashcard)
            .delete(delete_flashcard),
    )
}

async fn list_flashcards(State(state): State<AppState>) -> Result<Json<Vec<Flashcard>>, AppError> {
    let cards = db::list_flashcards(&state.pool)
        .await
        .map_err(AppError::database("fetching flashcards"))?;

    Ok(Json(cards))
}

async fn create_flashcard(
    State(state): State<AppState>,
    payload: Result<Json<CreateFlashcardRequest>, JsonRejection>,
) -> Result<Json<Flashcard>, AppError> {
    let Json(req) = payload?;
    let new_card = req.validate()?;

    let id = db::insert_flashcard(&state.pool, &new_card)
        .await
        .map_err(AppError::database("adding the flashcard"))?;

    tracing::info!("Created flashcard {}", id);

    Ok(Json(new_card.with_id(id)))
}

async fn update_flashcard(
    State(state): State<AppState>,
    payload: Result<Json<UpdateFlashcardRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    // A bodyless PUT carries no oldQuestion, so it matches nothing.
    let req = match payload {
        Ok(Json(req)) => req,
        Err(JsonRejection::MissingJsonContentType(_)) => UpdateFlashcardRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };

    let affected = db::update_flashcard_by_question(
        &state.pool,
        req.old_question.as_deref(),
        req.new_question.as_deref(),
        req.new_answer.as_deref(),
    )
    .await
    .map_err(AppError::database("updating the flashcard"))?;

    if affected == 0 {
        return Err(AppError::NotFound("Flashcard not found".to_string()));
    }

    tracing::info!("Updated {} flashcard(s)", affected);

    Ok(Json(MessageResponse::new("Flashcard updated successfully")))
}

async fn delete_flashcard(
    State(state): State<AppState>,
    payload: Result<Json<DeleteFlashcardRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(req) = payload?;
    let question = req.validate()?;

    let affected = db::delete_flashcard_by_question(&state.pool, &question)
        .await
        .map_err(AppError::database("deleting the flashcard"))?;

    if affected == 0 {
        return Err(AppError::NotFound(
            "No flashcard found with the specified question".to_string(),
        ));
    }

    tracing::info!("Deleted {} flashcard(s)", affected);

    Ok(Json(MessageResponse::new("Flashcard deleted successfully")))
}
