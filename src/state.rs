//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{CredentialPolicy, CredentialValidator};

#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<CredentialValidator>,
}

impl AppState {
    pub fn new(policy: CredentialPolicy) -> Self {
        Self {
            validator: Arc::new(CredentialValidator::new(policy)),
        }
    }
}
