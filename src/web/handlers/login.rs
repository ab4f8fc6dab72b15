//! Login form handlers.

use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Form, Query, State};

use crate::domain::{LoginOutcome, LoginRequest};
use crate::error::{LoginError, LoginRejection};
use crate::state::AppState;
use crate::web::views::DashboardView;

/// Decoded `key=value` pairs, in the order the client sent them.
type FormPairs = Vec<(String, String)>;

/// `username` / `password` parameters as sent by the client.
#[derive(Debug, Default)]
struct LoginParams {
    username: Option<String>,
    password: Option<String>,
}

impl LoginParams {
    /// Collects the login fields from decoded pairs.
    ///
    /// A repeated key keeps every value, joined with `,` in order
    /// (`password=a&password=b` → `"a,b"`). Other keys are ignored.
    fn from_pairs(pairs: FormPairs) -> LoginParams {
        let mut params = LoginParams::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "username" => &mut params.username,
                "password" => &mut params.password,
                _ => continue,
            };
            match slot.as_mut() {
                Some(joined) => {
                    joined.push(',');
                    joined.push_str(&value);
                }
                None => *slot = Some(value),
            }
        }

        params
    }

    /// Fills fields missing from `self` with the ones from `fallback`.
    fn or(self, fallback: LoginParams) -> LoginParams {
        LoginParams {
            username: self.username.or(fallback.username),
            password: self.password.or(fallback.password),
        }
    }
}

impl From<LoginParams> for LoginRequest {
    fn from(params: LoginParams) -> Self {
        LoginRequest::new(params.username, params.password)
    }
}

/// Checks submitted credentials and renders the resulting view.
///
/// # Endpoints
///
/// `POST /login` and `POST /loginDuplicate` (same handler, same behavior)
///
/// # Parameters
///
/// `username` and `password` are read from the form-encoded body. A field
/// absent from the body is taken from the query string instead. A body that
/// is not form-encoded contributes no fields. Repeated keys are joined with
/// `,`.
///
/// # Responses
///
/// - **200 OK**: `dashboard` view on success
/// - **200 OK**: `login` view with "Invalid credentials"
/// - **400 Bad Request**: `login` view with "Missing required parameters"
pub async fn login_handler(
    State(state): State<AppState>,
    query: Result<Query<FormPairs>, QueryRejection>,
    form: Result<Form<FormPairs>, FormRejection>,
) -> Result<DashboardView, LoginRejection> {
    let from_body = form.map(|Form(pairs)| pairs).unwrap_or_else(|rejection| {
        tracing::debug!("Ignoring login body: {}", rejection);
        FormPairs::new()
    });
    let from_query = query.map(|Query(pairs)| pairs).unwrap_or_else(|rejection| {
        tracing::debug!("Ignoring login query string: {}", rejection);
        FormPairs::new()
    });

    let params = LoginParams::from_pairs(from_body).or(LoginParams::from_pairs(from_query));
    let request = LoginRequest::from(params);
    let max_length = state.validator.policy().max_length();

    match state.validator.evaluate(&request) {
        LoginOutcome::Success => {
            let username = request.username.unwrap_or_default();
            tracing::info!(%username, "Login succeeded");
            Ok(DashboardView { username })
        }
        LoginOutcome::MissingParameter => {
            tracing::warn!(
                has_username = request.username.is_some(),
                has_password = request.password.is_some(),
                "Login rejected: missing parameters"
            );
            Err(LoginError::MissingParameters.with_form(max_length))
        }
        LoginOutcome::InvalidCredentials(reason) => {
            tracing::info!(reason = reason.as_str(), "Login rejected: invalid credentials");
            Err(LoginError::InvalidCredentials.with_form(max_length))
        }
    }
}

/// Answers any non-POST method on a login route.
///
/// # Response
///
/// **405 Method Not Allowed** with the `login` view, "Method not allowed",
/// and `Allow: POST`.
pub async fn method_not_allowed_handler(State(state): State<AppState>) -> LoginRejection {
    LoginError::MethodNotAllowed.with_form(state.validator.policy().max_length())
}
