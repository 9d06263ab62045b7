use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Pages of the registration wizard, in their fixed order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum FormStep {
    #[default]
    Personal,
    Address,
    Interests,
    Documents,
    Social,
    Esports,
    Summary,
}

impl FormStep {
    /// Get all steps in order
    pub fn all() -> &'static [FormStep] {
        &[
            Self::Personal,
            Self::Address,
            Self::Interests,
            Self::Documents,
            Self::Social,
            Self::Esports,
            Self::Summary,
        ]
    }

    /// Step number, 1-indexed for display
    pub fn number(&self) -> usize {
        self.index() + 1
    }

    pub fn total() -> usize {
        Self::all().len()
    }

    pub fn first() -> Self {
        Self::Personal
    }

    pub fn last() -> Self {
        Self::Summary
    }

    pub fn is_first(&self) -> bool {
        *self == Self::first()
    }

    pub fn is_last(&self) -> bool {
        *self == Self::last()
    }

    pub fn next(&self) -> Option<Self> {
        Self::all().get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<Self> {
        self.index()
            .checked_sub(1)
            .and_then(|i| Self::all().get(i).copied())
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Personal => "Personal Info",
            Self::Address => "Address",
            Self::Interests => "Interests",
            Self::Documents => "Documents",
            Self::Social => "Social Media",
            Self::Esports => "Esports Profiles",
            Self::Summary => "Summary",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Personal => "Basic personal information",
            Self::Address => "Your contact address",
            Self::Interests => "Gaming and esports interests",
            Self::Documents => "Upload your documents",
            Self::Social => "Connect your social accounts",
            Self::Esports => "Link your gaming profiles",
            Self::Summary => "Review your information",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Address => "address",
            Self::Interests => "interests",
            Self::Documents => "documents",
            Self::Social => "social",
            Self::Esports => "esports",
            Self::Summary => "summary",
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::Personal => 0,
            Self::Address => 1,
            Self::Interests => 2,
            Self::Documents => 3,
            Self::Social => 4,
            Self::Esports => 5,
            Self::Summary => 6,
        }
    }
}

impl FromStr for FormStep {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::all()
            .iter()
            .find(|step| step.as_str() == s)
            .copied()
            .ok_or_else(|| CoreError::InvalidFormStep {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for FormStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
