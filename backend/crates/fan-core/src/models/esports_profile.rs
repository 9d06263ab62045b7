use crate::ProfileStatus;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gaming platform account. Unique on (platform, username).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EsportsProfile {
    pub id: Uuid,
    pub platform: String,
    pub username: String,
    pub url: String,
    pub status: ProfileStatus,
    /// 0-100, populated once verified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<u32>,
}

impl EsportsProfile {
    pub fn new(id: Uuid, platform: String, username: String, url: String) -> Self {
        Self {
            id,
            platform,
            username,
            url,
            status: ProfileStatus::Pending,
            relevance_score: None,
        }
    }

    pub fn same_account(&self, platform: &str, username: &str) -> bool {
        self.platform == platform && self.username == username
    }
}
