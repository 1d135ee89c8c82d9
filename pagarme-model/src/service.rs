//! Session context shared by every model decoded from one API response.

use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Base URL of the production Pagar.me API.
pub const DEFAULT_ENDPOINT: &str = "https://api.pagar.me/1";

static DEFAULT_SERVICE: OnceLock<Service> = OnceLock::new();

/// Credentials and endpoint for talking to Pagar.me.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Secret API key sent with every request.
    pub api_key: String,
    /// Encryption key used to produce card hashes client-side.
    pub encryption_key: String,
    /// API base URL.
    pub endpoint: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            encryption_key: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Creates a config for the production endpoint.
    pub fn new(api_key: impl Into<String>, encryption_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            encryption_key: encryption_key.into(),
            ..Self::default()
        }
    }

    /// Reads `PAGARME_API_KEY`, `PAGARME_ENCRYPTION_KEY` and `PAGARME_ENDPOINT`.
    /// Unset variables keep their default value.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = std::env::var("PAGARME_API_KEY") {
            config.api_key = key;
        }
        if let Ok(key) = std::env::var("PAGARME_ENCRYPTION_KEY") {
            config.encryption_key = key;
        }
        if let Ok(endpoint) = std::env::var("PAGARME_ENDPOINT") {
            config.endpoint = endpoint;
        }
        config
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("api_key", &redact(&self.api_key))
            .field("encryption_key", &redact(&self.encryption_key))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "<unset>" } else { "<redacted>" }
}

/// Shared handle to a session context.
///
/// Models store the handle they were built with and hand it to every nested
/// model they decode, so a whole object graph shares one session.
#[derive(Clone, Debug)]
pub struct Service {
    config: Arc<ServiceConfig>,
}

impl Service {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns true if both handles point at the same session.
    #[must_use]
    pub fn ptr_eq(&self, other: &Service) -> bool {
        Arc::ptr_eq(&self.config, &other.config)
    }

    /// Returns the process-wide default service.
    ///
    /// Initialised from [`ServiceConfig::from_env`] on first use unless one
    /// was installed earlier with [`Service::install_default`]. Never changes
    /// afterwards.
    pub fn default_service() -> Service {
        DEFAULT_SERVICE
            .get_or_init(|| Service::new(ServiceConfig::from_env()))
            .clone()
    }

    /// Installs the process-wide default service.
    ///
    /// # Errors
    ///
    /// Fails if the default was already installed or already used.
    pub fn install_default(service: Service) -> ModelResult<()> {
        DEFAULT_SERVICE
            .set(service)
            .map_err(|_| ModelError::DefaultServiceAlreadySet)
    }

    /// Resolves an optional handle, falling back to the default service.
    pub fn or_default(service: Option<Service>) -> Service {
        service.unwrap_or_else(Service::default_service)
    }
}
