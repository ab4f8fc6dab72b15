#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use form_login::application::services::CredentialPolicy;
use form_login::config::Config;
use form_login::state::AppState;
use form_login::web::routes::login_routes;

pub const VALID_USERNAME: &str = "testUser";
pub const VALID_PASSWORD: &str = "testPassword";

pub fn create_test_state() -> AppState {
    AppState::new(Config::default().credential_policy())
}

pub fn create_test_server() -> TestServer {
    create_test_server_with(Config::default().credential_policy())
}

pub fn create_test_server_with(policy: CredentialPolicy) -> TestServer {
    let app = Router::new()
        .merge(login_routes())
        .with_state(AppState::new(policy));

    TestServer::new(app).unwrap()
}

/// Returns the view name from `<body data-view="...">`.
pub fn rendered_view(html: &str) -> Option<&str> {
    let start = html.find("data-view=\"")? + "data-view=\"".len();
    let len = html[start..].find('"')?;
    Some(&html[start..start + len])
}

/// Returns the error message shown on the page, if any.
pub fn rendered_error(html: &str) -> Option<&str> {
    let marker = "role=\"alert\">";
    let start = html.find(marker)? + marker.len();
    let len = html[start..].find("</p>")?;
    Some(html[start..start + len].trim())
}
