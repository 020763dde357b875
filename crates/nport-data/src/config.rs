//! Upstream API configuration.
//!
//! The sec-api.io credential is resolved once at startup and injected into
//! [`SecApiClient`](crate::sec_api::SecApiClient); request handling never reads
//! the process environment.

use crate::error::{NportError, Result};
use std::time::Duration;

/// Environment variable holding the sec-api.io token.
pub const API_KEY_VAR: &str = "SEC_API_KEY";

/// Environment variable overriding the upstream base URL.
pub const BASE_URL_VAR: &str = "SEC_API_BASE_URL";

/// Environment variable overriding the outbound timeout, in seconds.
pub const TIMEOUT_VAR: &str = "SEC_API_TIMEOUT_SECS";

/// sec-api.io base URL
pub const DEFAULT_BASE_URL: &str = "https://api.sec-api.io";

/// Outbound request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the sec-api.io search endpoint.
#[derive(Clone)]
pub struct SecApiConfig {
    api_key: String,
    /// Base URL the `/form-nport` path is appended to
    pub base_url: String,
    /// Timeout applied to each outbound request
    pub timeout: Duration,
}

impl SecApiConfig {
    /// Create a configuration with the default base URL and timeout.
    ///
    /// # Errors
    /// Returns [`NportError::MissingCredential`] if `api_key` is blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(NportError::MissingCredential(API_KEY_VAR));
        }

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Point the client at a different host (trailing slashes are dropped).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the outbound request timeout.
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through an arbitrary variable lookup.
    ///
    /// # Example
    /// ```
    /// use nport_data::config::SecApiConfig;
    ///
    /// let config = SecApiConfig::from_lookup(|key| match key {
    ///     "SEC_API_KEY" => Some("secret".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.base_url, "https://api.sec-api.io");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).ok_or(NportError::MissingCredential(API_KEY_VAR))?;
        let mut config = Self::new(api_key)?;

        if let Some(base_url) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(base_url.trim());
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                NportError::InvalidConfig(format!("{TIMEOUT_VAR} must be whole seconds, got {raw:?}"))
            })?;
            if secs == 0 {
                return Err(NportError::InvalidConfig(format!("{TIMEOUT_VAR} must be at least 1")));
            }
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// The configured credential.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl std::fmt::Debug for SecApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecApiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
