pub mod list_service;
pub mod validation;
