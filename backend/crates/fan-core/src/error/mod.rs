use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on {field}: {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid form step: {value} {location}")]
    InvalidFormStep {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid document type: {value} {location}")]
    InvalidDocumentType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid document status: {value} {location}")]
    InvalidDocumentStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid profile status: {value} {location}")]
    InvalidProfileStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid social platform: {value} {location}")]
    InvalidSocialPlatform {
        value: String,
        location: ErrorLocation,
    },

    #[error("Record serialization error: {source} {location}")]
    Serialization {
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
