//! Field validators and input masks shared by the wizard forms.

pub mod birthdate;
pub mod contact;
pub mod formatting;
pub mod id;
pub mod national_id;

pub use birthdate::{BirthdateCheck, MINIMUM_AGE_YEARS, check_birthdate};
pub use contact::{is_valid_email, is_valid_url};
pub use formatting::{digits, format_national_id, format_phone, format_zip_code};
pub use id::generate_id;
pub use national_id::is_valid_national_id;
