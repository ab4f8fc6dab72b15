//! Login route configuration.

use crate::state::AppState;
use crate::web::handlers::{login_handler, method_not_allowed_handler};
use axum::{Router, routing::post};

/// Paths served by the login handler.
///
/// `/loginDuplicate` is a legacy alias of `/login`; both mount the same
/// handler so their behavior cannot drift apart.
pub const LOGIN_PATHS: [&str; 2] = ["/login", "/loginDuplicate"];

/// Login routes.
///
/// # Endpoints
///
/// - `POST /login` - Credential check
/// - `POST /loginDuplicate` - Same as `/login`
///
/// Any other method on these paths gets `405 Method Not Allowed`.
pub fn login_routes() -> Router<AppState> {
    LOGIN_PATHS.iter().fold(Router::new(), |router, path| {
        router.route(
            path,
            post(login_handler).fallback(method_not_allowed_handler),
        )
    })
}
