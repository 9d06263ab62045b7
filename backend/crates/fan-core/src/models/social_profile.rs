use crate::{ProfileStatus, SocialInsights, SocialPlatform};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProfile {
    pub id: Uuid,
    pub platform: SocialPlatform,
    pub username: String,
    pub url: String,
    pub connected: bool,
    pub status: ProfileStatus,
    /// Populated only once the profile is verified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<SocialInsights>,
}

impl SocialProfile {
    pub fn new(id: Uuid, platform: SocialPlatform, username: String, url: String) -> Self {
        Self {
            id,
            platform,
            username,
            url,
            connected: true,
            status: ProfileStatus::Pending,
            insights: None,
        }
    }
}
