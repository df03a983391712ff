//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models — they carry no domain behaviour.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// reading_history
// ---------------------------------------------------------------------------

/// One snapshot of reading progress for a volume.
///
/// `id` is generated by the database and `created_at` is stamped by the store
/// on insert, so neither is ever supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ReadingHistoryRow {
    pub id: i32,
    /// Owning volume. The foreign key lives outside this crate.
    pub volume_id: i32,
    /// Page reached at this point. Not range-checked here.
    pub current_page: i32,
    pub created_at: DateTime<Utc>,
}
