use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_DOCUMENT_SIZE_BYTES: u64 = 1;
pub const MAX_DOCUMENT_SIZE_BYTES: u64 = 50 * 1024 * 1024;
pub const DEFAULT_DOCUMENT_MAX_SIZE_BYTES: u64 = 5 * 1024 * 1024;

pub const DEFAULT_ALLOWED_MIME_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/jpg", "application/pdf"];

/// Upload limits for identity documents.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    pub max_size_bytes: u64,
    pub allowed_mime_types: Vec<String>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            max_size_bytes: DEFAULT_DOCUMENT_MAX_SIZE_BYTES,
            allowed_mime_types: DEFAULT_ALLOWED_MIME_TYPES
                .iter()
                .map(|mime| mime.to_string())
                .collect(),
        }
    }
}

impl DocumentConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_size_bytes < MIN_DOCUMENT_SIZE_BYTES
            || self.max_size_bytes > MAX_DOCUMENT_SIZE_BYTES
        {
            return Err(ConfigError::documents(format!(
                "documents.max_size_bytes must be {}-{}, got {}",
                MIN_DOCUMENT_SIZE_BYTES, MAX_DOCUMENT_SIZE_BYTES, self.max_size_bytes
            )));
        }

        if self.allowed_mime_types.is_empty() {
            return Err(ConfigError::documents(
                "documents.allowed_mime_types cannot be empty",
            ));
        }

        Ok(())
    }
}
