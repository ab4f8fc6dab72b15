//! Handlers for the login form routes.

mod login;

pub use login::{login_handler, method_not_allowed_handler};
