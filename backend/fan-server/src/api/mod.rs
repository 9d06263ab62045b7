pub mod error;
pub mod pages;
pub mod redirect;
pub mod registration;
