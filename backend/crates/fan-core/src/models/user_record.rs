//! The fan record assembled by the registration wizard.

use crate::{
    Address, AddressPatch, CoreError, Document, EsportsProfile, Result as CoreErrorResult,
    SocialProfile,
};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Single aggregate built step by step and persisted wholesale on submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    /// CPF, stored formatted as typed (000.000.000-00)
    pub national_id: String,
    /// ISO date (YYYY-MM-DD) as entered
    pub birthdate: String,
    pub phone: String,
    pub address: Address,
    /// Ordered, without duplicates
    pub interests: Vec<String>,
    pub documents: Vec<Document>,
    pub social_profiles: Vec<SocialProfile>,
    pub esports_profiles: Vec<EsportsProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Partial record pushed up by the step forms.
///
/// Top-level `Some` values replace the field; `address` is merged key-wise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserRecordPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub national_id: Option<String>,
    pub birthdate: Option<String>,
    pub phone: Option<String>,
    pub address: Option<AddressPatch>,
    pub interests: Option<Vec<String>>,
    pub documents: Option<Vec<Document>>,
    pub social_profiles: Option<Vec<SocialProfile>>,
    pub esports_profiles: Option<Vec<EsportsProfile>>,
}

impl UserRecord {
    pub fn apply(&mut self, patch: UserRecordPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(national_id) = patch.national_id {
            self.national_id = national_id;
        }
        if let Some(birthdate) = patch.birthdate {
            self.birthdate = birthdate;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(address) = patch.address {
            self.address.apply(address);
        }
        if let Some(interests) = patch.interests {
            self.interests = interests;
        }
        if let Some(documents) = patch.documents {
            self.documents = documents;
        }
        if let Some(social_profiles) = patch.social_profiles {
            self.social_profiles = social_profiles;
        }
        if let Some(esports_profiles) = patch.esports_profiles {
            self.esports_profiles = esports_profiles;
        }
    }

    /// Name, email, national id and birthdate all present
    pub fn has_personal_fields(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.national_id.is_empty()
            && !self.birthdate.is_empty()
    }

    /// Any document, social profile or esports profile exists
    pub fn has_sub_resources(&self) -> bool {
        !self.documents.is_empty()
            || !self.social_profiles.is_empty()
            || !self.esports_profiles.is_empty()
    }

    #[track_caller]
    pub fn to_json(&self) -> CoreErrorResult<String> {
        serde_json::to_string(self).map_err(|source| CoreError::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    pub fn from_json(json: &str) -> CoreErrorResult<Self> {
        serde_json::from_str(json).map_err(|source| CoreError::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
