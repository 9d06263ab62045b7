//! One form per wizard step. Forms own only step-local state (drafts and
//! error messages); record changes are handed back to the session as
//! patches or new items.

pub mod address;
pub mod documents;
pub mod esports_profiles;
pub mod field_errors;
pub mod interests;
pub mod personal_info;
pub mod social_media;
pub mod summary;
