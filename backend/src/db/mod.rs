//! SQLite persistence for the penguin catalog.
//!
//! A connection is opened per call against the configured database file, the
//! same way every handler in this server reaches the database. Records are
//! listed in insertion order through the auto-increment `seq` column; the
//! public `id` is a UUID that is never reused.

mod repository;

pub use repository::PenguinRepository;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("no penguin with id {0}")]
    NotFound(String),
    #[error("missing required fields: {}", .0.join(", "))]
    Invalid(Vec<&'static str>),
    #[error("database task failed: {0}")]
    Blocking(String),
}
