pub mod dashboard;
pub mod info;
pub mod profile;
