use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Social networks a fan can connect. At most one profile per platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialPlatform {
    Instagram,
    Twitter,
    Facebook,
    Youtube,
    Twitch,
}

impl SocialPlatform {
    pub fn all() -> &'static [SocialPlatform] {
        &[
            Self::Instagram,
            Self::Twitter,
            Self::Facebook,
            Self::Youtube,
            Self::Twitch,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::Youtube => "youtube",
            Self::Twitch => "twitch",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::Twitter => "Twitter/X",
            Self::Facebook => "Facebook",
            Self::Youtube => "YouTube",
            Self::Twitch => "Twitch",
        }
    }

    /// Chart color used for this platform's engagement bar
    pub fn color(&self) -> &'static str {
        match self {
            Self::Instagram => "bg-purple-500",
            Self::Twitter => "bg-blue-500",
            Self::Facebook => "bg-blue-700",
            Self::Youtube => "bg-red-500",
            Self::Twitch => "bg-purple-600",
        }
    }
}

impl FromStr for SocialPlatform {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "instagram" => Ok(Self::Instagram),
            "twitter" => Ok(Self::Twitter),
            "facebook" => Ok(Self::Facebook),
            "youtube" => Ok(Self::Youtube),
            "twitch" => Ok(Self::Twitch),
            _ => Err(CoreError::InvalidSocialPlatform {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
