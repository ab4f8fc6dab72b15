//! # Form Login
//!
//! A small form-based login service built with Axum and Askama.
//!
//! A `POST` to `/login` (or its alias `/loginDuplicate`) with `username` and
//! `password` fields renders either the `dashboard` view or the `login` view
//! with an error message. Credentials are checked against a single configured
//! pair; nothing is stored and no session is issued.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Login requests and outcomes
//! - **Application Layer** ([`application`]) - Credential validation
//! - **Web Layer** ([`web`]) - Handlers, routes, and views
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl -d 'username=testUser&password=testPassword' http://localhost:8080/login
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::{LoginError, LoginRejection};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CredentialPolicy, CredentialValidator};
    pub use crate::domain::{LoginOutcome, LoginRequest, RejectReason};
    pub use crate::error::{LoginError, LoginRejection};
    pub use crate::state::AppState;
}
