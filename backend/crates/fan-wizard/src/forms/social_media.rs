use crate::{Result, WizardError};

use fan_core::validators::{generate_id, is_valid_url};
use fan_core::{SocialPlatform, SocialProfile};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unsubmitted input of the "connect profile" panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialDraft {
    pub platform: String,
    pub username: String,
    pub url: String,
}

/// Step 5: social media accounts, at most one per platform.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SocialMediaForm {
    draft: SocialDraft,
    error: Option<String>,
}

impl SocialMediaForm {
    pub fn draft(&self) -> &SocialDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate `draft` against the already linked profiles and build the new
    /// profile. The draft is kept on failure and reset on success.
    pub fn connect(
        &mut self,
        draft: SocialDraft,
        existing: &[SocialProfile],
    ) -> Result<SocialProfile> {
        self.draft = draft;

        match Self::validate(&self.draft, existing) {
            Ok(platform) => {
                let profile = SocialProfile::new(
                    generate_id(),
                    platform,
                    self.draft.username.trim().to_string(),
                    self.draft.url.trim().to_string(),
                );
                self.draft = SocialDraft::default();
                self.error = None;
                Ok(profile)
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    fn validate(draft: &SocialDraft, existing: &[SocialProfile]) -> Result<SocialPlatform> {
        let Ok(platform) = SocialPlatform::from_str(draft.platform.trim()) else {
            return Err(WizardError::field(
                "platform",
                "Por favor, selecione uma plataforma",
            ));
        };

        if draft.username.trim().is_empty() {
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

        if existing.iter().any(|p| p.platform == platform) {
            return Err(WizardError::duplicate(format!(
                "Você já conectou sua conta de {}",
                platform.display_name()
            )));
        }

        Ok(platform)
    }
}
