use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    // In-memory needs a single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    fan_db::connection::sqlite_pool::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Writes a raw value into the storage table, bypassing the store
pub async fn write_raw_value(pool: &SqlitePool, key: &str, value: &str) {
    sqlx::query("INSERT INTO fan_storage (key, value, updated_at) VALUES (?, ?, 0)")
        .bind(key)
        .bind(value)
        .execute(pool)
        .await
        .expect("Failed to write raw value");
}

pub async fn count_rows(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM fan_storage")
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}
