//! `InMemoryReadingHistoryStore` — a test double for `ReadingHistoryRepository`.
//!
//! Useful in unit tests and in callers' tests where a live Postgres is
//! either unavailable or irrelevant.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};

use crate::{models::ReadingHistoryRow, repository::ReadingHistoryRepository, DbError};

/// Behaviour injected into the store at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehaviour {
    /// Behave like a working table.
    Store,
    /// Fail every call as if the pool had been closed.
    FailClosed,
}

#[derive(Debug)]
struct Table {
    rows: Vec<ReadingHistoryRow>,
    /// `None` once `i32::MAX` has been handed out.
    next_id: Option<i32>,
}

/// A reading history store that keeps rows in memory.
///
/// Ids are handed out from 1 upwards like a serial column; once `i32::MAX`
/// has been used every further insert fails. Clones share the same
/// table.
#[derive(Debug, Clone)]
pub struct InMemoryReadingHistoryStore {
    pub behaviour: MockBehaviour,
    table: Arc<Mutex<Table>>,
}

impl InMemoryReadingHistoryStore {
    /// Create an empty, working store.
    pub fn new() -> Self {
        Self::with_behaviour(MockBehaviour::Store)
    }

    /// Create a store whose every call fails with `sqlx::Error::PoolClosed`.
    pub fn failing() -> Self {
        Self::with_behaviour(MockBehaviour::FailClosed)
    }

    fn with_behaviour(behaviour: MockBehaviour) -> Self {
        Self {
            behaviour,
            table: Arc::new(Mutex::new(Table { rows: Vec::new(), next_id: Some(1) })),
        }
    }

    /// Number of rows currently held, across all volumes.
    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check(&self) -> Result<(), DbError> {
        match self.behaviour {
            MockBehaviour::Store => Ok(()),
            MockBehaviour::FailClosed => Err(DbError::Sqlx(sqlx::Error::PoolClosed)),
        }
    }
}

impl Default for InMemoryReadingHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReadingHistoryRepository for InMemoryReadingHistoryStore {
    async fn list(&self, volume_id: i32) -> Result<Vec<ReadingHistoryRow>, DbError> {
        self.check()?;

        let mut rows: Vec<ReadingHistoryRow> = self
            .table
            .lock()
            .unwrap()
            .rows
            .iter()
            .filter(|row| row.volume_id == volume_id)
            .cloned()
            .collect();

        // Equal timestamps fall back to insertion order, newest first.
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn add(&self, volume_id: i32, current_page: i32) -> Result<(), DbError> {
        self.check()?;

        let mut table = self.table.lock().unwrap();
        let id = table.next_id.ok_or_else(|| {
            DbError::Sqlx(sqlx::Error::Protocol(
                "reading_history id sequence exhausted".to_string(),
            ))
        })?;
        table.next_id = id.checked_add(1);
        table.rows.push(ReadingHistoryRow {
            id,
            volume_id,
            current_page,
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), DbError> {
        self.check()?;

        self.table.lock().unwrap().rows.retain(|row| row.id != id);
        Ok(())
    }
}
