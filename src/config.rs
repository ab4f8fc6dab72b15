//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:8080"
//! export LOGIN_USERNAME="testUser"
//! export LOGIN_PASSWORD="testPassword"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `LOGIN_USERNAME` - Accepted username (default: `testUser`)
//! - `LOGIN_PASSWORD` - Accepted password (default: `testPassword`)
//! - `CREDENTIAL_MAX_LENGTH` - Longest accepted username or password, in
//!   characters (default: 255)

use anyhow::{Context, Result};
use std::env;

use crate::application::services::CredentialPolicy;

pub const DEFAULT_USERNAME: &str = "testUser";
pub const DEFAULT_PASSWORD: &str = "testPassword";
pub const DEFAULT_MAX_LENGTH: usize = 255;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub login_username: String,
    pub login_password: String,
    /// Applies to both the username and the password.
    pub credential_max_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            login_username: DEFAULT_USERNAME.to_string(),
            login_password: DEFAULT_PASSWORD.to_string(),
            credential_max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `CREDENTIAL_MAX_LENGTH` is set but is not a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let login_username = env::var("LOGIN_USERNAME").unwrap_or(defaults.login_username);
        let login_password = env::var("LOGIN_PASSWORD").unwrap_or(defaults.login_password);

        let credential_max_length = match env::var("CREDENTIAL_MAX_LENGTH") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("CREDENTIAL_MAX_LENGTH must be a number, got '{raw}'"))?,
            Err(_) => defaults.credential_max_length,
        };

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            login_username,
            login_password,
            credential_max_length,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `credential_max_length` is zero
    /// - the configured username or password could never pass validation
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.credential_max_length == 0 {
            anyhow::bail!("CREDENTIAL_MAX_LENGTH must be at least 1");
        }

        for (name, value) in [
            ("LOGIN_USERNAME", &self.login_username),
            ("LOGIN_PASSWORD", &self.login_password),
        ] {
            if value.trim().is_empty() {
                anyhow::bail!("{name} must not be blank");
            }
            if value.chars().count() > self.credential_max_length {
                anyhow::bail!(
                    "{name} is longer than CREDENTIAL_MAX_LENGTH ({})",
                    self.credential_max_length
                );
            }
        }

        Ok(())
    }

    /// Builds the immutable policy the credential validator checks against.
    pub fn credential_policy(&self) -> CredentialPolicy {
        CredentialPolicy::new(
            self.login_username.clone(),
            self.login_password.clone(),
            self.credential_max_length,
        )
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Login username: {}", self.login_username);
        tracing::info!("  Login password: {}", mask_secret(&self.login_password));
        tracing::info!("  Credential max length: {}", self.credential_max_length);
    }
}

/// Masks a secret for logging, keeping only its length visible.
///
/// - `testPassword` → `*** (12 chars)`
fn mask_secret(secret: &str) -> String {
    format!("*** ({} chars)", secret.chars().count())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
