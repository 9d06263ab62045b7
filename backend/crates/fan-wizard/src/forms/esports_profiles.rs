use crate::{Result, WizardError};

use fan_core::EsportsProfile;
use fan_core::validators::{generate_id, is_valid_url};

use serde::{Deserialize, Serialize};

/// Platforms offered in the picker; any other free-text name is accepted too
pub const ESPORTS_PLATFORMS: [&str; 14] = [
    "Steam",
    "Epic Games",
    "Battle.net",
    "Faceit",
    "ESEA",
    "GamersClub",
    "League of Legends",
    "Valorant",
    "EA/Origin",
    "Ubisoft Connect",
    "PlayStation Network",
    "Xbox Live",
    "Nintendo Switch",
    "Outro",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EsportsDraft {
    pub platform: String,
    pub username: String,
    pub url: String,
}

/// Step 6: gaming platform accounts, unique per (platform, username).
#[derive(Debug, Clone, Default, Serialize)]
pub struct EsportsProfilesForm {
    draft: EsportsDraft,
    error: Option<String>,
}

impl EsportsProfilesForm {
    pub fn draft(&self) -> &EsportsDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn add(&mut self, draft: EsportsDraft, existing: &[EsportsProfile]) -> Result<EsportsProfile> {
        self.draft = draft;

        match Self::validate(&self.draft, existing) {
            Ok(()) => {
                let profile = EsportsProfile::new(
                    generate_id(),
                    self.draft.platform.trim().to_string(),
                    self.draft.username.trim().to_string(),
                    self.draft.url.trim().to_string(),
                );
                self.draft = EsportsDraft::default();
                self.error = None;
                Ok(profile)
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    fn validate(draft: &EsportsDraft, existing: &[EsportsProfile]) -> Result<()> {
        let platform = draft.platform.trim();
        if platform.is_empty() {
            return Err(WizardError::field(
                "platform",
                "Por favor, selecione uma plataforma",
            ));
        }

        let username = draft.username.trim();
        if username.is_empty() {
            return Err(WizardError::field(
                "username",
                "Por favor, insira seu nome de usuário",
            ));
        }

        let url = draft.url.trim();
        if url.is_empty() {
            return Err(WizardError::field("url", "Por favor, insira a URL do perfil"));
        }
        if !is_valid_url(url) {
            return Err(WizardError::field("url", "Por favor, insira uma URL válida"));
        }

        if existing.iter().any(|p| p.same_account(platform, username)) {
            return Err(WizardError::duplicate(format!(
                "Você já conectou esta conta de {}",
                platform
            )));
        }

        Ok(())
    }
}
