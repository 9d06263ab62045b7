pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    pages::profile::ProfileResponse,
    registration::{
        document_response::DocumentResponse,
        document_type_request::DocumentTypeRequest,
        field_request::{FieldBlurRequest, FieldChangeRequest},
        interest_request::InterestRequest,
        profile_response::{EsportsProfileResponse, SocialProfileResponse},
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
