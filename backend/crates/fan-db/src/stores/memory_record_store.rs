use crate::{DbError, RecordStore, Result};

use fan_core::UserRecord;

use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use error_location::ErrorLocation;
use tokio::sync::RwLock;

/// Process-local record store. Keeps the serialized form so a load always
/// hands back an independent copy, the same as the SQLite store.
#[derive(Clone, Default)]
pub struct InMemoryRecordStore {
    slot: Arc<RwLock<Option<String>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding `record` from the start
    pub fn with_record(record: &UserRecord) -> Result<Self> {
        let value = record.to_json().map_err(|source| DbError::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;
        Ok(Self {
            slot: Arc::new(RwLock::new(Some(value))),
        })
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn load(&self) -> Result<Option<UserRecord>> {
        let slot = self.slot.read().await;
        match slot.as_deref() {
            None => Ok(None),
            Some(value) => UserRecord::from_json(value)
                .map(Some)
                .map_err(|source| DbError::CorruptRecord {
                    key: String::from("memory"),
                    source,
                    location: ErrorLocation::from(Location::caller()),
                }),
        }
    }

    async fn save(&self, record: &UserRecord) -> Result<()> {
        let value = record.to_json().map_err(|source| DbError::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;
        *self.slot.write().await = Some(value);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.slot.write().await = None;
        Ok(())
    }
}
