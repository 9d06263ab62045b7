use crate::{Result, WizardError};

use serde::Serialize;

const MIN_CUSTOM_INTEREST_LENGTH: usize = 2;

pub const PREDEFINED_INTERESTS: [&str; 25] = [
    "Counter-Strike",
    "CS2",
    "League of Legends",
    "Dota 2",
    "Valorant",
    "Rainbow Six Siege",
    "Apex Legends",
    "Fortnite",
    "Call of Duty",
    "PUBG",
    "Rocket League",
    "FIFA",
    "Overwatch",
    "Hearthstone",
    "Teamfight Tactics",
    "StarCraft II",
    "World of Warcraft",
    "Jogos de Luta",
    "Jogos de Cartas Colecionáveis",
    "Esports Mobile",
    "Eventos de Esports",
    "Roupas da FURIA",
    "Hardware para Jogos",
    "Streaming",
    "Cosplay",
];

/// Step 3: predefined interests toggled on and off, plus free-text ones.
///
/// Operations take the record's current list and return the new one.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InterestsForm {
    error: Option<String>,
}

impl InterestsForm {
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Deselect a selected interest or select a predefined one. Free text
    /// goes through `add_custom`.
    pub fn toggle(&mut self, interests: &[String], interest: &str) -> Result<Vec<String>> {
        if interests.iter().any(|i| i == interest) {
            return Ok(Self::without(interests, interest));
        }

        if !PREDEFINED_INTERESTS.contains(&interest) {
            return Err(WizardError::field("interest", "Interesse desconhecido"));
        }

        let mut updated = interests.to_vec();
        updated.push(interest.to_string());
        Ok(updated)
    }

    pub fn add_custom(&mut self, interests: &[String], custom: &str) -> Result<Vec<String>> {
        let custom = custom.trim();

        let outcome = if custom.is_empty() {
            Err(WizardError::field("customInterest", "Por favor, insira um interesse"))
        } else if custom.chars().count() < MIN_CUSTOM_INTEREST_LENGTH {
            Err(WizardError::field(
                "customInterest",
                "O interesse deve ter pelo menos 2 caracteres",
            ))
        } else if interests.iter().any(|i| i == custom) {
            Err(WizardError::duplicate("Este interesse já foi adicionado"))
        } else {
            Ok(())
        };

        match outcome {
            Ok(()) => {
                self.error = None;
                let mut updated = interests.to_vec();
                updated.push(custom.to_string());
                Ok(updated)
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    pub fn remove(&mut self, interests: &[String], interest: &str) -> Vec<String> {
        Self::without(interests, interest)
    }

    fn without(interests: &[String], interest: &str) -> Vec<String> {
        interests
            .iter()
            .filter(|i| i.as_str() != interest)
            .cloned()
            .collect()
    }
}
