//! REST API error types
//!
//! Every error renders as `{"error": {"code", "message", "field?"}}` with a
//! matching HTTP status.

use fan_db::DbError;
use fan_wizard::WizardError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// User-facing message
    pub message: String,
    /// Field key for field-validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Field validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Rejected upload (400)
    #[error("File rejected: {message} {location}")]
    FileConstraint {
        message: String,
        location: ErrorLocation,
    },

    /// Item already present (409)
    #[error("Duplicate: {message} {location}")]
    Duplicate {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal { .. } => log::error!("{}", self),
            _ => log::warn!("{}", self),
        }

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::FileConstraint { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "FILE_CONSTRAINT".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Duplicate { message, .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "DUPLICATE".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert wizard errors to API errors
impl From<WizardError> for ApiError {
    #[track_caller]
    fn from(e: WizardError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let message = e.user_message();

        match e {
            WizardError::Field { field, .. } => ApiError::Validation {
                message,
                field: Some(field.to_string()),
                location,
            },
            WizardError::FileConstraint { .. } => ApiError::FileConstraint { message, location },
            WizardError::Duplicate { .. } => ApiError::Duplicate { message, location },
            WizardError::Navigation { .. } => ApiError::BadRequest { message, location },
            WizardError::Store { source, .. } => {
                log::error!("Storage error during wizard operation: {}", source);
                ApiError::Internal { message, location }
            }
        }
    }
}

/// Convert storage errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose storage details to clients
        log::error!("Storage error: {}", e);

        let message = match e {
            DbError::CorruptRecord { .. } => "Stored registration could not be read",
            _ => "Storage operation failed",
        };
        ApiError::Internal {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::BadRequest {
            message: format!("Invalid UUID format: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
