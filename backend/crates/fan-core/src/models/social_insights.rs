use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) for simulated interaction counts
pub const MAX_INTERACTIONS: u32 = 50;

/// Analysis results attached to a social profile once it is verified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialInsights {
    /// Engagement percentage, 0-100
    pub engagement: u32,
    /// Interactions with the team's content
    pub interactions: u32,
    /// Share of esports content, 0-100
    pub esports_content: u32,
}
