//! Integration tests for [`db::PgReadingHistoryStore`] against a live Postgres.
//!
//! These need a live database, so they are ignored by default.  Run with:
//!
//!     DATABASE_URL=postgres://... cargo test -p db --test reading_history_pg -- --ignored
//!
//! Each test uses a single-connection pool and a temporary
//! `reading_history` table, so runs never see each other's rows.

use chrono::Utc;
use sqlx::postgres::PgPoolOptions;

use db::{DbPool, PgReadingHistoryStore, ReadingHistoryRepository};

const CREATE_TABLE: &str = r#"
    CREATE TEMPORARY TABLE reading_history (
        id SERIAL PRIMARY KEY,
        volume_id INTEGER NOT NULL,
        current_page INTEGER NOT NULL,
        created_at TIMESTAMPTZ NOT NULL
    )
"#;

async fn test_pool() -> DbPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for Postgres tests");
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await
        .expect("failed to connect to DATABASE_URL");
    sqlx::query(CREATE_TABLE)
        .execute(&pool)
        .await
        .expect("failed to create temporary table");
    pool
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn list_without_history_is_empty() {
    let pool = test_pool().await;
    let store = PgReadingHistoryStore::new(pool);

    assert!(store.list(7).await.expect("list").is_empty());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn add_then_list_returns_the_new_row() {
    let pool = test_pool().await;
    let store = PgReadingHistoryStore::new(pool);

    // timestamptz drops nanoseconds.
    let before = Utc::now() - chrono::Duration::milliseconds(1);
    store.add(3, 55).await.expect("add");

    let rows = store.list(3).await.expect("list");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].volume_id, 3);
    assert_eq!(rows[0].current_page, 55);
    assert!(rows[0].created_at >= before);
    assert!(store.list(4).await.expect("list").is_empty());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn volume_seven_history_walkthrough() {
    let pool = test_pool().await;
    let store = PgReadingHistoryStore::new(pool);

    store.add(7, 42).await.expect("add 42");
    let rows = store.list(7).await.expect("list");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].current_page, 42);

    store.add(7, 100).await.expect("add 100");
    let rows = store.list(7).await.expect("list");
    let pages: Vec<i32> = rows.iter().map(|r| r.current_page).collect();
    assert_eq!(pages, vec![100, 42]);
    assert!(rows[0].created_at >= rows[1].created_at);

    store.delete(rows[1].id).await.expect("delete");
    let rows = store.list(7).await.expect("list");
    let pages: Vec<i32> = rows.iter().map(|r| r.current_page).collect();
    assert_eq!(pages, vec![100]);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn delete_of_unknown_id_succeeds() {
    let pool = test_pool().await;
    let store = PgReadingHistoryStore::new(pool);

    store.add(1, 10).await.expect("add");
    let before = store.list(1).await.expect("list");

    store.delete(i32::MAX).await.expect("delete of missing id");

    assert_eq!(store.list(1).await.expect("list"), before);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn closed_pool_error_is_propagated() {
    let pool = test_pool().await;
    let store = PgReadingHistoryStore::new(pool.clone());
    pool.close().await;

    let err = store.list(1).await.expect_err("closed pool must fail");
    assert!(matches!(err, db::DbError::Sqlx(sqlx::Error::PoolClosed)));
}
