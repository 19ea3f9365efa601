use std::env;
use std::time::Duration;
use url::Url;

use crate::constants::{ACCEPT_BASE_URL, CHECKOUT_BASE_URL, SOLUTIONS_BASE_URL};

/// Connection settings for a [`PaymobClient`](crate::PaymobClient).
#[derive(Clone)]
pub struct PaymobConfig {
    /// Merchant API key exchanged for an auth token
    pub api_key: String,
    /// Base URL of the primary Accept host
    pub accept_base_url: String,
    /// Base URL of the host serving payments, capture and queries
    pub solutions_base_url: String,
    /// Base URL used when building unified checkout links
    pub checkout_base_url: String,
    /// Per-request timeout (None = wait indefinitely)
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for PaymobConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymobConfig")
            .field("api_key", &"[REDACTED]")
            .field("accept_base_url", &self.accept_base_url)
            .field("solutions_base_url", &self.solutions_base_url)
            .field("checkout_base_url", &self.checkout_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl PaymobConfig {
    /// Production hosts, no timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            accept_base_url: ACCEPT_BASE_URL.to_string(),
            solutions_base_url: SOLUTIONS_BASE_URL.to_string(),
            checkout_base_url: CHECKOUT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    pub fn with_accept_base_url(mut self, url: impl Into<String>) -> Self {
        self.accept_base_url = url.into();
        self
    }

    pub fn with_solutions_base_url(mut self, url: impl Into<String>) -> Self {
        self.solutions_base_url = url.into();
        self
    }

    pub fn with_checkout_base_url(mut self, url: impl Into<String>) -> Self {
        self.checkout_base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load configuration from `PAYMOB_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Required: API key
        let api_key = lookup("PAYMOB_API_KEY")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingRequired("PAYMOB_API_KEY"))?;

        let mut config = Self::new(api_key);

        // Optional: host overrides
        if let Some(url) = optional_url(&lookup, "PAYMOB_ACCEPT_URL")? {
            config.accept_base_url = url;
        }
        if let Some(url) = optional_url(&lookup, "PAYMOB_SOLUTIONS_URL")? {
            config.solutions_base_url = url;
        }
        if let Some(url) = optional_url(&lookup, "PAYMOB_CHECKOUT_URL")? {
            config.checkout_base_url = url;
        }

        // Optional: timeout
        if let Some(raw) = lookup("PAYMOB_TIMEOUT_SECS") {
            config.timeout = Some(parse_timeout(&raw)?);
        }

        tracing::debug!(?config, "loaded Paymob configuration");
        Ok(config)
    }
}

fn optional_url<F>(lookup: &F, var: &str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var).filter(|s| !s.is_empty()) {
        Some(url) => {
            Url::parse(&url).map_err(|_| ConfigError::InvalidUrl(url.clone()))?;
            Ok(Some(url))
        }
        None => Ok(None),
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingRequired(&'static str),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("invalid timeout (expected a positive number of seconds): {0}")]
    InvalidTimeout(String),
}
