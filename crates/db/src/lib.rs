//! `db` crate — pure persistence layer.
//!
//! Provides the shared pool type, typed row structs, and the reading
//! history repository used by the wellread service.  No business logic
//! lives here.

pub mod error;
pub mod mock;
pub mod models;
pub mod pool;
pub mod repository;

pub use error::DbError;
pub use models::ReadingHistoryRow;
pub use pool::DbPool;
pub use repository::{PgReadingHistoryStore, ReadingHistoryRepository};
