use crate::{DbError, RecordStore, Result};

use fan_core::UserRecord;

use std::panic::Location;

use async_trait::async_trait;
use chrono::Utc;
use error_location::ErrorLocation;
use log::debug;
use sqlx::{Row, SqlitePool};

/// Record store backed by the `fan_storage` key/value table.
pub struct SqliteRecordStore {
    pool: SqlitePool,
    key: String,
}

impl SqliteRecordStore {
    pub fn new(pool: SqlitePool, key: impl Into<String>) -> Self {
        Self {
            pool,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn load(&self) -> Result<Option<UserRecord>> {
        let row = sqlx::query("SELECT value FROM fan_storage WHERE key = ?")
            .bind(&self.key)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let value: String = row.try_get("value")?;
        let record = UserRecord::from_json(&value).map_err(|source| DbError::CorruptRecord {
            key: self.key.clone(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Some(record))
    }

    async fn save(&self, record: &UserRecord) -> Result<()> {
        let value = record.to_json().map_err(|source| DbError::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;
        let updated_at = Utc::now().timestamp();

        sqlx::query(
            r#"
              INSERT INTO fan_storage (key, value, updated_at)
              VALUES (?, ?, ?)
              ON CONFLICT(key) DO UPDATE SET
                  value = excluded.value,
                  updated_at = excluded.updated_at
              "#,
        )
        .bind(&self.key)
        .bind(&value)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        debug!("Saved record under '{}' ({} bytes)", self.key, value.len());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        sqlx::query("DELETE FROM fan_storage WHERE key = ?")
            .bind(&self.key)
            .execute(&self.pool)
            .await?;

        debug!("Cleared record under '{}'", self.key);
        Ok(())
    }
}
