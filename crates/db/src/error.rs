//! Typed error type for the db crate.

use thiserror::Error;

/// A storage operation failed.
///
/// The driver error is carried through untouched; callers decide what a
/// constraint violation or a dropped connection means for them.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
