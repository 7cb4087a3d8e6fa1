//! Typed error type for the db crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Missing or malformed connection settings.
    #[error("configuration error: {0}")]
    Config(String),
}
