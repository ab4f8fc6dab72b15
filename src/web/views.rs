//! Server-rendered views.
//!
//! Each page sets `data-view` on `<body>` to the view name (`login` or
//! `dashboard`) so clients and tests can tell which view was selected.

use askama::Template;
use askama_web::WebTemplate;

/// The `login` view.
///
/// Renders `templates/login.html` with:
/// - Username/password form
/// - Error message, only on failure paths
#[derive(Debug, Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginView {
    pub error: Option<String>,
    /// Longest value the server accepts for either field.
    pub max_length: usize,
}

/// The `dashboard` view shown after a successful login.
#[derive(Debug, Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardView {
    pub username: String,
}
