use serde::Serialize;

/// Engagement score needed for the top tier
pub const SUPERFAN_THRESHOLD: u32 = 80;

/// Tier label derived from the engagement score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FanLevel {
    Novice,
    Fan,
    Enthusiast,
    Superfan,
}

impl FanLevel {
    pub fn from_score(engagement_score: u32) -> Self {
        match engagement_score {
            s if s < 30 => Self::Novice,
            s if s < 60 => Self::Fan,
            s if s < SUPERFAN_THRESHOLD => Self::Enthusiast,
            _ => Self::Superfan,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Novice => "novice",
            Self::Fan => "fan",
            Self::Enthusiast => "enthusiast",
            Self::Superfan => "superfan",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Novice => "Novato",
            Self::Fan => "Fã",
            Self::Enthusiast => "Entusiasta",
            Self::Superfan => "Superfã",
        }
    }

    /// Points still missing to reach superfan, 0 once there
    pub fn points_to_superfan(engagement_score: u32) -> u32 {
        SUPERFAN_THRESHOLD.saturating_sub(engagement_score)
    }
}

impl std::fmt::Display for FanLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
