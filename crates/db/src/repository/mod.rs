//! Repositories — one method per database operation.
//!
//! Every method returns a `Result<T, DbError>`.
//! No business logic, no domain types — pure SQL.

use async_trait::async_trait;

use crate::{models::ReadingHistoryRow, DbError};

pub mod reading_history;

pub use reading_history::PgReadingHistoryStore;

/// Reading progress history for volumes.
///
/// Implemented by [`PgReadingHistoryStore`] and, for tests, by
/// [`crate::mock::InMemoryReadingHistoryStore`].
#[async_trait]
pub trait ReadingHistoryRepository: Send + Sync {
    /// All history for `volume_id`, most recent first. Empty if there is none.
    async fn list(&self, volume_id: i32) -> Result<Vec<ReadingHistoryRow>, DbError>;

    /// Record that `volume_id` has reached `current_page` as of now.
    async fn add(&self, volume_id: i32, current_page: i32) -> Result<(), DbError>;

    /// Remove one history entry. Unknown ids are not an error.
    async fn delete(&self, id: i32) -> Result<(), DbError>;
}
