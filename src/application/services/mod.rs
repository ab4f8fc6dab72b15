//! Business logic services for the application layer.

pub mod credential_service;

pub use credential_service::{CredentialPolicy, CredentialValidator};
