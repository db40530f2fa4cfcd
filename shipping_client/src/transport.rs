//! HTTP seam between the rate client and the network.
//!
//! `HttpTransport` issues a single GET and hands back the raw status and body;
//! decoding stays in `rate_client`. `ReqwestTransport` is the production
//! implementation on top of a blocking `reqwest` client with a fixed timeout.
use std::time::Duration;

use log::debug;
use reqwest::Url;
use reqwest::blocking::Client;
use shipping_common::ShippingError;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl RawResponse {
    /// `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs the GET request for the rate client.
pub trait HttpTransport: Send + Sync {
    /// Sends a GET to `url` with `headers` and returns the raw response.
    ///
    /// Transport failures map to [`ShippingError::Network`] or
    /// [`ShippingError::Timeout`]; non-success statuses are not errors here.
    fn get(&self, url: &Url, headers: &[(String, String)]) -> Result<RawResponse, ShippingError>;
}

/// Blocking `reqwest` transport.
pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Builds a client that gives up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, ShippingError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ShippingError::Configuration(format!("HTTP client setup failed: {}", e)))?;
        Ok(Self { client, timeout })
    }

    fn map_error(&self, err: reqwest::Error) -> ShippingError {
        if err.is_timeout() {
            ShippingError::Timeout(self.timeout)
        } else if err.is_builder() {
            ShippingError::Configuration(err.to_string())
        } else {
            ShippingError::Network(err.to_string())
        }
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &Url, headers: &[(String, String)]) -> Result<RawResponse, ShippingError> {
        let mut request = self.client.get(url.clone());
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().map_err(|e| self.map_error(e))?;
        let status = response.status().as_u16();
        debug!("Rate API answered with status {}", status);
        let body = response.text().map_err(|e| self.map_error(e))?;

        Ok(RawResponse { status, body })
    }
}
