pub mod document_response;
pub mod document_type_request;
pub mod field_request;
pub mod interest_request;
pub mod profile_response;
pub mod registration;
