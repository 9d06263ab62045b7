use crate::UserRecord;

use serde::{Deserialize, Serialize};

/// Overall verification state shown on the summary step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// A verified document plus at least one verified social or esports profile
    Verified,
    /// Something was submitted for verification but the bar isn't met yet
    Pending,
    /// No documents or profiles at all
    Incomplete,
}

impl VerificationStatus {
    pub fn of(record: &UserRecord) -> Self {
        let verified_document = record.documents.iter().any(|d| d.status.is_verified());
        let verified_social = record
            .social_profiles
            .iter()
            .any(|p| p.status.is_verified());
        let verified_esports = record
            .esports_profiles
            .iter()
            .any(|p| p.status.is_verified());

        if verified_document && (verified_social || verified_esports) {
            Self::Verified
        } else if record.has_sub_resources() {
            Self::Pending
        } else {
            Self::Incomplete
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Pending => "pending",
            Self::Incomplete => "incomplete",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Verified => "Verificado",
            Self::Pending => "Verificação Pendente",
            Self::Incomplete => "Incompleto",
        }
    }
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
