use fan_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by wizard operations.
///
/// Everything except `Store` is recoverable and local to one step: the
/// message is meant to be shown to the user as-is.
#[derive(Error, Debug)]
pub enum WizardError {
    #[error("{message} ({field}) {location}")]
    Field {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    FileConstraint {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    Duplicate {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    Navigation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Storage error: {source} {location}")]
    Store {
        source: DbError,
        location: ErrorLocation,
    },
}

impl WizardError {
    #[track_caller]
    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        Self::Field {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn file_constraint(message: impl Into<String>) -> Self {
        Self::FileConstraint {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::Duplicate {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn navigation(message: impl Into<String>) -> Self {
        Self::Navigation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text shown to the user, without source location
    pub fn user_message(&self) -> String {
        match self {
            Self::Field { message, .. }
            | Self::FileConstraint { message, .. }
            | Self::Duplicate { message, .. }
            | Self::Navigation { message, .. } => message.clone(),
            Self::Store { .. } => String::from("Não foi possível salvar seus dados"),
        }
    }

    /// Field key for field-validation errors
    pub fn field_key(&self) -> Option<&'static str> {
        match self {
            Self::Field { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<DbError> for WizardError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, WizardError>;
