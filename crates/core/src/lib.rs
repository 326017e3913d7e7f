//! Shared error taxonomy and request/response models for the Logtrack service.

pub mod errors;
pub mod models;
