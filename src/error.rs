//! Errors raised while handling a login request.
//!
//! Every variant is recovered into the `login` view: the [`Display`](std::fmt::Display)
//! text becomes the page's error message and [`LoginError::status`] picks the
//! HTTP status.

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::web::views::LoginView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Missing required parameters")]
    MissingParameters,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl LoginError {
    /// HTTP status used when rendering this error.
    ///
    /// Invalid credentials are a UI-level error and keep `200 OK`.
    pub fn status(&self) -> StatusCode {
        match self {
            LoginError::MissingParameters => StatusCode::BAD_REQUEST,
            LoginError::InvalidCredentials => StatusCode::OK,
            LoginError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Pairs the error with the form's field length limit for rendering.
    pub fn with_form(self, max_length: usize) -> LoginRejection {
        LoginRejection {
            error: self,
            max_length,
        }
    }
}

/// A [`LoginError`] ready to be rendered as the `login` view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginRejection {
    pub error: LoginError,
    /// Rendered as the inputs' `maxlength`.
    pub max_length: usize,
}

impl IntoResponse for LoginRejection {
    fn into_response(self) -> Response {
        let view = LoginView {
            error: Some(self.error.to_string()),
            max_length: self.max_length,
        };

        let mut response = (self.error.status(), view).into_response();

        if self.error == LoginError::MethodNotAllowed {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("POST"));
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            LoginError::MissingParameters.to_string(),
            "Missing required parameters"
        );
        assert_eq!(LoginError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(LoginError::MethodNotAllowed.to_string(), "Method not allowed");
    }

    #[test]
    fn test_statuses() {
        assert_eq!(LoginError::MissingParameters.status(), StatusCode::BAD_REQUEST);
        assert_eq!(LoginError::InvalidCredentials.status(), StatusCode::OK);
        assert_eq!(
            LoginError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn test_into_response_sets_status_and_allow_header() {
        let response = LoginError::MethodNotAllowed.with_form(255).into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(header::ALLOW).unwrap(), "POST");

        let response = LoginError::MissingParameters.with_form(255).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get(header::ALLOW).is_none());

        let response = LoginError::InvalidCredentials.with_form(255).into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
