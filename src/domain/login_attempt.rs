//! Login attempt model: the submitted credentials and the decision about them.

/// Credentials submitted with a single login request.
///
/// A field is `None` when the client did not send it at all. An empty value
/// (`username=`) is still `Some("")`.
///
/// # Usage Flow
///
/// 1. Built by the login handler from the form body and query string
/// 2. Passed to [`crate::application::services::CredentialValidator::evaluate`]
/// 3. Dropped once the response is rendered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        Self { username, password }
    }

    /// Returns both fields when the client sent both of them.
    pub fn fields(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some((username.as_str(), password.as_str())),
            _ => None,
        }
    }
}

/// Why a present pair of credentials was rejected.
///
/// Only used for logging; clients see the same message for every reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Username or password is empty after trimming whitespace.
    Blank,
    /// Username or password is longer than the configured maximum.
    TooLong,
    /// Well-formed, but not the accepted pair.
    Mismatch,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::Blank => "blank",
            RejectReason::TooLong => "too_long",
            RejectReason::Mismatch => "mismatch",
        }
    }
}

/// Categorical result of credential validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    MissingParameter,
    InvalidCredentials(RejectReason),
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success)
    }
}
