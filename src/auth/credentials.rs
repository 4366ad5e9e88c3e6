//! Credential management for Fadada API authentication.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

use crate::error::FadadaError;

/// Default environment variable holding the application id.
pub const APP_ID_VAR: &str = "FADADA_APP_ID";
/// Default environment variable holding the shared secret.
pub const APP_SECRET_VAR: &str = "FADADA_APP_SECRET";
/// Default environment variable holding the endpoint base URL.
pub const ENDPOINT_VAR: &str = "FADADA_ENDPOINT";

/// Application credentials issued by Fadada.
#[derive(Clone)]
pub struct Credentials {
    /// The application id, sent as `app_id` on every request
    pub app_id: String,
    /// The shared secret, only ever used as digest input
    app_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an application id and secret.
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_secret: SecretString::from(app_secret.into()),
        }
    }

    /// Get the shared secret for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.app_secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("app_secret", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing application credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(app_id, app_secret),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl CredentialsProvider for Arc<StaticCredentials> {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads from `FADADA_APP_ID` and `FADADA_APP_SECRET`.
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from the default environment variables.
    pub fn from_env() -> Result<Self, FadadaError> {
        Self::from_env_vars(APP_ID_VAR, APP_SECRET_VAR)
    }

    /// Create credentials from custom environment variable names.
    pub fn from_env_vars(id_var: &str, secret_var: &str) -> Result<Self, FadadaError> {
        let app_id = read_var(id_var)?;
        let app_secret = read_var(secret_var)?;

        Ok(Self {
            credentials: Credentials::new(app_id, app_secret),
        })
    }

    /// Try to create credentials from the default environment variables.
    ///
    /// Returns `None` if the environment variables are not set.
    pub fn try_from_env() -> Option<Self> {
        Self::from_env().ok()
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Read the endpoint base URL from `FADADA_ENDPOINT`.
pub fn endpoint_from_env() -> Result<String, FadadaError> {
    read_var(ENDPOINT_VAR)
}

fn read_var(name: &str) -> Result<String, FadadaError> {
    std::env::var(name)
        .map(|value| value.trim().to_string())
        .map_err(|_| FadadaError::MissingConfig(format!("environment variable {name} not set")))
}
