//! Flashcard database operations
//!
//! Each function issues exactly one parameterized statement. Errors are
//! returned untouched; interpreting them is the caller's business.

use sqlx::SqlitePool;

use crate::domain::{Flashcard, NewFlashcard};

/// Row type for flashcards table
#[derive(Debug, sqlx::FromRow)]
pub struct FlashcardRow {
    pub id: i64,
    pub question: String,
    pub answer: String,
}

impl From<FlashcardRow> for Flashcard {
    fn from(row: FlashcardRow) -> Self {
        Flashcard {
            id: row.id,
            question: row.question,
            answer: row.answer,
        }
    }
}

/// List every flashcard in storage order
pub async fn list_flashcards(pool: &SqlitePool) -> Result<Vec<Flashcard>, sqlx::Error> {
    let rows = sqlx::query_as::<_, FlashcardRow>(
        "SELECT id, question, answer FROM flashcards ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Flashcard::from).collect())
}

/// Insert a flashcard, returning the id the store assigned
pub async fn insert_flashcard(pool: &SqlitePool, card: &NewFlashcard) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO flashcards (question, answer) VALUES (?, ?)")
        .bind(&card.question)
        .bind(&card.answer)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Replace question and answer on every row whose question equals `old_question`
///
/// `None` binds SQL NULL: a NULL `old_question` matches nothing, and NULL
/// replacement values violate the table's NOT NULL constraints.
pub async fn update_flashcard_by_question(
    pool: &SqlitePool,
    old_question: Option<&str>,
    new_question: Option<&str>,
    new_answer: Option<&str>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE flashcards SET question = ?, answer = ? WHERE question = ?")
        .bind(new_question)
        .bind(new_answer)
        .bind(old_question)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Delete every row whose question equals `question`
pub async fn delete_flashcard_by_question(
    pool: &SqlitePool,
    question: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM flashcards WHERE question = ?")
        .bind(question)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Count stored flashcards
pub async fn count_flashcards(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM flashcards")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
