use crate::Result;

use fan_core::UserRecord;

use async_trait::async_trait;

/// The persistence slot holding the one submitted registration record.
///
/// Absence is not an error: `load` returns `None` until something is saved
/// and again after `clear`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn load(&self) -> Result<Option<UserRecord>>;

    /// Replace the stored record wholesale
    async fn save(&self, record: &UserRecord) -> Result<()>;

    async fn clear(&self) -> Result<()>;
}
