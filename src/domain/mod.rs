//! Domain models for the flashcard service

mod error;
mod flashcard;

pub use error::*;
pub use flashcard::*;
