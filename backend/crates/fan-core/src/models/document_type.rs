use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Accepted kinds of identity document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Carteira de Identidade (RG)
    #[default]
    IdentityCard,
    /// Carteira de Motorista (CNH)
    DriversLicense,
    Passport,
    MilitaryId,
    /// Carteira de Trabalho
    WorkCard,
}

impl DocumentType {
    pub fn all() -> &'static [DocumentType] {
        &[
            Self::IdentityCard,
            Self::DriversLicense,
            Self::Passport,
            Self::MilitaryId,
            Self::WorkCard,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IdentityCard => "identity_card",
            Self::DriversLicense => "drivers_license",
            Self::Passport => "passport",
            Self::MilitaryId => "military_id",
            Self::WorkCard => "work_card",
        }
    }

    /// Label shown next to the document in listings
    pub fn label(&self) -> &'static str {
        match self {
            Self::IdentityCard => "Carteira de Identidade (RG)",
            Self::DriversLicense => "Carteira de Motorista (CNH)",
            Self::Passport => "Passaporte",
            Self::MilitaryId => "Carteira Militar",
            Self::WorkCard => "Carteira de Trabalho",
        }
    }
}

impl FromStr for DocumentType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "identity_card" => Ok(Self::IdentityCard),
            "drivers_license" => Ok(Self::DriversLicense),
            "passport" => Ok(Self::Passport),
            "military_id" => Ok(Self::MilitaryId),
            "work_card" => Ok(Self::WorkCard),
            _ => Err(CoreError::InvalidDocumentType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
