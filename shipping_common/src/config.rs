//! Explicit configuration for the rate client.
//!
//! The credential, base URL and fixed header set live in a `ClientConfig`
//! value handed to the client at construction. `from_env` is the only place
//! that reads process state; tests use `from_lookup` with a closure instead.
use std::time::Duration;

use crate::error::ShippingError;
use crate::net::{
    BASE_URL_ENV_VAR, DEFAULT_BASE_URL, DEFAULT_HEADERS, DEFAULT_ORIGIN_COUNTRY, TOKEN_ENV_VAR,
};

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for talking to the rate API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, without the calculation path.
    pub base_url: String,
    /// Origin country sent as `FromCountry`.
    pub origin_country: String,
    /// Bearer credential. `None` is a configuration error at request time.
    pub api_token: Option<String>,
    /// Upper bound for one request round trip.
    pub timeout: Duration,
    /// Fixed headers sent with every request (authorization excluded).
    pub headers: Vec<(String, String)>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: String::from(DEFAULT_BASE_URL),
            origin_country: String::from(DEFAULT_ORIGIN_COUNTRY),
            api_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            headers: DEFAULT_HEADERS
                .iter()
                .map(|(name, value)| (String::from(*name), String::from(*value)))
                .collect(),
        }
    }
}

impl ClientConfig {
    /// Builds a config from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = ClientConfig::default();
        config.api_token = read(TOKEN_ENV_VAR);
        if let Some(base_url) = read(BASE_URL_ENV_VAR) {
            config.base_url = base_url;
        }
        config
    }

    /// Sets the bearer credential.
    pub fn with_token(mut self, token: &str) -> Self {
        self.api_token = Some(String::from(token));
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = String::from(base_url);
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the origin country.
    pub fn with_origin_country(mut self, origin_country: &str) -> Self {
        self.origin_country = String::from(origin_country);
        self
    }

    /// Value of the `authorization` header.
    ///
    /// Fails with [`ShippingError::Configuration`] when no usable token is set.
    pub fn authorization(&self) -> Result<String, ShippingError> {
        match self.api_token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => Ok(format!("Bearer {}", token)),
            _ => Err(ShippingError::Configuration(format!(
                "Missing {} secret.",
                TOKEN_ENV_VAR
            ))),
        }
    }
}
