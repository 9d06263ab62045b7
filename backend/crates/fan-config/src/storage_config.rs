use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_FILENAME, DEFAULT_STORAGE_KEY};

use std::path::Path;

use serde::Deserialize;

/// Where the single registration record is kept.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite file, relative to the config directory
    pub path: String,
    /// Key the serialized record is stored under
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_STORAGE_FILENAME),
            key: String::from(DEFAULT_STORAGE_KEY),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::storage(
                "storage.path must be relative and cannot contain '..'",
            ));
        }

        if self.key.trim().is_empty() {
            return Err(ConfigError::storage("storage.key cannot be empty"));
        }

        Ok(())
    }
}
