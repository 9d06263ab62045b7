use crate::{FieldErrors, Result, WizardError};

use fan_core::{UserRecord, UserRecordPatch};
use fan_core::validators::{
    BirthdateCheck, check_birthdate, digits, format_national_id, format_phone, is_valid_email,
    is_valid_national_id,
};

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const MIN_NAME_LENGTH: usize = 3;
const MIN_PHONE_DIGITS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    Name,
    Email,
    NationalId,
    Birthdate,
    Phone,
}

impl PersonalField {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::NationalId => "nationalId",
            Self::Birthdate => "birthdate",
            Self::Phone => "phone",
        }
    }

    /// Current value of this field in `record`
    pub fn value_in<'a>(&self, record: &'a UserRecord) -> &'a str {
        match self {
            Self::Name => &record.name,
            Self::Email => &record.email,
            Self::NationalId => &record.national_id,
            Self::Birthdate => &record.birthdate,
            Self::Phone => &record.phone,
        }
    }
}

impl fmt::Display for PersonalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PersonalField {
    type Err = WizardError;

    #[track_caller]
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "nationalId" => Ok(Self::NationalId),
            "birthdate" => Ok(Self::Birthdate),
            "phone" => Ok(Self::Phone),
            _ => Err(WizardError::field("field", format!("Campo desconhecido: {s}"))),
        }
    }
}

/// Validate one personal field the way the blur handler does
pub fn validate_personal_field(field: PersonalField, value: &str, today: NaiveDate) -> Result<()> {
    let key = field.key();
    match field {
        PersonalField::Name => {
            let name = value.trim();
            if name.is_empty() {
                return Err(WizardError::field(key, "Nome é obrigatório"));
            }
            if name.chars().count() < MIN_NAME_LENGTH {
                return Err(WizardError::field(
                    key,
                    "O nome deve ter pelo menos 3 caracteres",
                ));
            }
        }
        PersonalField::Email => {
            if value.trim().is_empty() {
                return Err(WizardError::field(key, "E-mail é obrigatório"));
            }
            if !is_valid_email(value) {
                return Err(WizardError::field(key, "Por favor, insira um e-mail válido"));
            }
        }
        PersonalField::NationalId => {
            if digits(value).is_empty() {
                return Err(WizardError::field(key, "CPF é obrigatório"));
            }
            if !is_valid_national_id(value) {
                return Err(WizardError::field(key, "Por favor, insira um CPF válido"));
            }
        }
        PersonalField::Phone => {
            let phone = digits(value);
            if phone.is_empty() {
                return Err(WizardError::field(key, "Telefone é obrigatório"));
            }
            if phone.len() < MIN_PHONE_DIGITS {
                return Err(WizardError::field(
                    key,
                    "Por favor, insira um número de telefone válido",
                ));
            }
        }
        PersonalField::Birthdate => match check_birthdate(value, today) {
            BirthdateCheck::Valid => {}
            BirthdateCheck::Missing => {
                return Err(WizardError::field(key, "Data de nascimento é obrigatória"));
            }
            BirthdateCheck::Malformed => {
                return Err(WizardError::field(
                    key,
                    "Por favor, insira uma data válida (AAAA-MM-DD)",
                ));
            }
            BirthdateCheck::InFuture => {
                return Err(WizardError::field(
                    key,
                    "A data de nascimento não pode ser no futuro",
                ));
            }
            BirthdateCheck::TooYoung => {
                return Err(WizardError::field(key, "Você deve ter pelo menos 13 anos"));
            }
        },
    }
    Ok(())
}

/// Step 1: name, email, national id, birthdate and phone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PersonalInfoForm {
    errors: FieldErrors,
}

impl PersonalInfoForm {
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Keystroke: mask national id and phone, clear the field's error and
    /// return the patch for the record.
    pub fn change(&mut self, field: PersonalField, value: &str) -> UserRecordPatch {
        self.errors.clear(field.key());

        let mut patch = UserRecordPatch::default();
        match field {
            PersonalField::Name => patch.name = Some(value.to_string()),
            PersonalField::Email => patch.email = Some(value.to_string()),
            PersonalField::NationalId => patch.national_id = Some(format_national_id(value)),
            PersonalField::Birthdate => patch.birthdate = Some(value.to_string()),
            PersonalField::Phone => patch.phone = Some(format_phone(value)),
        }
        patch
    }

    /// Focus lost: validate and record or clear the inline error
    pub fn blur(&mut self, field: PersonalField, value: &str, today: NaiveDate) -> Result<()> {
        match validate_personal_field(field, value, today) {
            Ok(()) => {
                self.errors.clear(field.key());
                Ok(())
            }
            Err(e) => {
                self.errors.set(field.key(), e.user_message());
                Err(e)
            }
        }
    }
}
