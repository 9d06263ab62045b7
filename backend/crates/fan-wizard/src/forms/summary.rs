use fan_core::{DocumentStatus, ProfileStatus, UserRecord, VerificationStatus, progress_percent};

use serde::Serialize;

/// Per-kind verification check shown on the summary step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCheck {
    Verified,
    Pending,
    Missing,
}

impl ItemCheck {
    fn from_flags(any_verified: bool, any_present: bool) -> Self {
        if any_verified {
            Self::Verified
        } else if any_present {
            Self::Pending
        } else {
            Self::Missing
        }
    }
}

/// Step 7: read-only review of everything collected.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryView {
    pub record: UserRecord,
    pub interest_count: usize,
    pub document_count: usize,
    pub social_profile_count: usize,
    pub esports_profile_count: usize,
    pub document_check: ItemCheck,
    pub social_check: ItemCheck,
    pub esports_check: ItemCheck,
    pub verification_status: VerificationStatus,
    pub verification_label: &'static str,
    pub progress: u8,
}

impl SummaryView {
    pub fn of(record: &UserRecord) -> Self {
        let verification_status = VerificationStatus::of(record);
        Self {
            record: record.clone(),
            interest_count: record.interests.len(),
            document_count: record.documents.len(),
            social_profile_count: record.social_profiles.len(),
            esports_profile_count: record.esports_profiles.len(),
            document_check: ItemCheck::from_flags(
                record
                    .documents
                    .iter()
                    .any(|d| d.status == DocumentStatus::Verified),
                !record.documents.is_empty(),
            ),
            social_check: ItemCheck::from_flags(
                record
                    .social_profiles
                    .iter()
                    .any(|p| p.status == ProfileStatus::Verified),
                !record.social_profiles.is_empty(),
            ),
            esports_check: ItemCheck::from_flags(
                record
                    .esports_profiles
                    .iter()
                    .any(|p| p.status == ProfileStatus::Verified),
                !record.esports_profiles.is_empty(),
            ),
            verification_status,
            verification_label: verification_status.label(),
            progress: progress_percent(record),
        }
    }
}
