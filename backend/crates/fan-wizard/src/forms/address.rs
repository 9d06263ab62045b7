use crate::{FieldErrors, Result, WizardError};

use fan_core::validators::{digits, format_zip_code};
use fan_core::{AddressPatch, UserRecord};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const ZIP_CODE_DIGITS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressField {
    Street,
    Number,
    Complement,
    Neighborhood,
    City,
    State,
    ZipCode,
}

impl AddressField {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Street => "street",
            Self::Number => "number",
            Self::Complement => "complement",
            Self::Neighborhood => "neighborhood",
            Self::City => "city",
            Self::State => "state",
            Self::ZipCode => "zipCode",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Street => "Rua",
            Self::Number => "Número",
            Self::Complement => "Complemento",
            Self::Neighborhood => "Bairro",
            Self::City => "Cidade",
            Self::State => "Estado",
            Self::ZipCode => "CEP",
        }
    }

    pub fn value_in<'a>(&self, record: &'a UserRecord) -> &'a str {
        let address = &record.address;
        match self {
            Self::Street => &address.street,
            Self::Number => &address.number,
            Self::Complement => address.complement.as_deref().unwrap_or_default(),
            Self::Neighborhood => &address.neighborhood,
            Self::City => &address.city,
            Self::State => &address.state,
            Self::ZipCode => &address.zip_code,
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AddressField {
    type Err = WizardError;

    #[track_caller]
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "street" => Ok(Self::Street),
            "number" => Ok(Self::Number),
            "complement" => Ok(Self::Complement),
            "neighborhood" => Ok(Self::Neighborhood),
            "city" => Ok(Self::City),
            "state" => Ok(Self::State),
            "zipCode" => Ok(Self::ZipCode),
            _ => Err(WizardError::field("field", format!("Campo desconhecido: {s}"))),
        }
    }
}

pub fn validate_address_field(field: AddressField, value: &str) -> Result<()> {
    match field {
        AddressField::Complement => Ok(()),
        AddressField::ZipCode => {
            let zip = digits(value);
            if zip.is_empty() {
                Err(WizardError::field(field.key(), "CEP é obrigatório"))
            } else if zip.len() != ZIP_CODE_DIGITS {
                Err(WizardError::field(field.key(), "Por favor, insira um CEP válido"))
            } else {
                Ok(())
            }
        }
        _ if value.trim().is_empty() => Err(WizardError::field(
            field.key(),
            format!("{} é obrigatório", field.label()),
        )),
        _ => Ok(()),
    }
}

/// Step 2: postal address. Every change carries a single key so the
/// session's key-wise merge keeps the sibling fields.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddressForm {
    errors: FieldErrors,
}

impl AddressForm {
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn change(&mut self, field: AddressField, value: &str) -> AddressPatch {
        self.errors.clear(field.key());

        let value = value.to_string();
        let mut patch = AddressPatch::default();
        match field {
            AddressField::Street => patch.street = Some(value),
            AddressField::Number => patch.number = Some(value),
            AddressField::Complement => patch.complement = Some(value),
            AddressField::Neighborhood => patch.neighborhood = Some(value),
            AddressField::City => patch.city = Some(value),
            AddressField::State => patch.state = Some(value),
            AddressField::ZipCode => patch.zip_code = Some(format_zip_code(&value)),
        }
        patch
    }

    pub fn blur(&mut self, field: AddressField, value: &str) -> Result<()> {
        match validate_address_field(field, value) {
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
