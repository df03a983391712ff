//! Postgres-backed reading history.

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use crate::{models::ReadingHistoryRow, DbError, DbPool};

use super::ReadingHistoryRepository;

/// Reading history stored in the `reading_history` table.
///
/// Holds a clone of the host's pool; it never opens or closes connections
/// itself.
#[derive(Debug, Clone)]
pub struct PgReadingHistoryStore {
    pool: DbPool,
}

impl PgReadingHistoryStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReadingHistoryRepository for PgReadingHistoryStore {
    async fn list(&self, volume_id: i32) -> Result<Vec<ReadingHistoryRow>, DbError> {
        let rows = sqlx::query_as::<_, ReadingHistoryRow>(
            "select * from reading_history where volume_id = $1 order by created_at desc",
        )
        .bind(volume_id)
        .fetch_all(&self.pool)
        .await?;

        debug!("Listed {} reading history rows for volume {}", rows.len(), volume_id);
        Ok(rows)
    }

    async fn add(&self, volume_id: i32, current_page: i32) -> Result<(), DbError> {
        sqlx::query(
            "insert into reading_history (volume_id, current_page, created_at) values ($1, $2, $3)",
        )
        .bind(volume_id)
        .bind(current_page)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        debug!("Added reading history: volume={}, page={}", volume_id, current_page);
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("delete from reading_history where id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!("Deleted reading history {} ({} rows)", id, result.rows_affected());
        Ok(())
    }
}
