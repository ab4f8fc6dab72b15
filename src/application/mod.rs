//! Application layer services implementing business logic.
//!
//! Services hold the decision rules and expose a small API to HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::credential_service::CredentialValidator`] - Login credential checks

pub mod services;
