pub mod address;
pub mod document;
pub mod document_status;
pub mod document_type;
pub mod esports_profile;
pub mod form_step;
pub mod profile_status;
pub mod route;
pub mod social_insights;
pub mod social_platform;
pub mod social_profile;
pub mod user_record;
pub mod verification_status;
