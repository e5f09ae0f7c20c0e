//! Flashcards - a REST API over a single SQLite table of question/answer pairs

pub mod api;
pub mod config;
pub mod db;
pub mod domain;
