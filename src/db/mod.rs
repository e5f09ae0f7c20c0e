//! Flashcard store - SQLite with sqlx

mod flashcards;
mod pool;

pub use flashcards::*;
pub use pool::*;
