//! Credential validation against a single configured username/password pair.

use crate::domain::{LoginOutcome, LoginRequest, RejectReason};

/// The accepted credentials and the length limit, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPolicy {
    username: String,
    password: String,
    max_length: usize,
}

impl CredentialPolicy {
    /// Creates a new policy.
    ///
    /// # Arguments
    ///
    /// - `username` - the only accepted username, compared exactly
    /// - `password` - the only accepted password, compared exactly
    /// - `max_length` - longest accepted value, in characters, for either field
    pub fn new(username: String, password: String, max_length: usize) -> Self {
        Self {
            username,
            password,
            max_length,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

/// Decides whether a login attempt succeeds.
///
/// Pure and deterministic: no I/O, no state beyond the immutable policy.
pub struct CredentialValidator {
    policy: CredentialPolicy,
}

impl CredentialValidator {
    pub fn new(policy: CredentialPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &CredentialPolicy {
        &self.policy
    }

    /// Evaluates a request as received from the transport.
    ///
    /// Returns [`LoginOutcome::MissingParameter`] when either field was not
    /// sent, otherwise defers to [`validate`](Self::validate).
    pub fn evaluate(&self, request: &LoginRequest) -> LoginOutcome {
        match request.fields() {
            Some((username, password)) => self.validate(username, password),
            None => LoginOutcome::MissingParameter,
        }
    }

    /// Validates a present (possibly empty) username and password.
    ///
    /// Checks run in order; the first failing one decides the reason:
    ///
    /// 1. Blank after trimming whitespace → [`RejectReason::Blank`]
    /// 2. Longer than the maximum length → [`RejectReason::TooLong`]
    /// 3. Not an exact match for the accepted pair → [`RejectReason::Mismatch`]
    pub fn validate(&self, username: &str, password: &str) -> LoginOutcome {
        if username.trim().is_empty() || password.trim().is_empty() {
            return LoginOutcome::InvalidCredentials(RejectReason::Blank);
        }

        if self.exceeds_max_length(username) || self.exceeds_max_length(password) {
            return LoginOutcome::InvalidCredentials(RejectReason::TooLong);
        }

        if username == self.policy.username && password == self.policy.password {
            return LoginOutcome::Success;
        }

        LoginOutcome::InvalidCredentials(RejectReason::Mismatch)
    }

    fn exceeds_max_length(&self, value: &str) -> bool {
        value.chars().count() > self.policy.max_length
    }
}
