//! Rate lookups against the Navlungo calculation endpoint.
//!
//! `RateRequestClient` turns a `ShippingRequest` into
//! `GET {base}/Calculations/calculate?ToCountry=..&FromCountry=..&Weight=..`,
//! checks the credential before anything touches the network, and decodes the
//! JSON array into `CarrierQuote`s in response order. Sorting is left to the
//! presenter.
use std::sync::Arc;

use log::{error, info};
use reqwest::Url;
use shipping_common::net::{
    AUTHORIZATION, PARAM_FROM_COUNTRY, PARAM_TO_COUNTRY, PARAM_WEIGHT, calculate_endpoint,
};
use shipping_common::{CarrierQuote, ClientConfig, Result, ShippingError, ShippingRequest};

use crate::transport::{HttpTransport, ReqwestTransport};

/// Anything that can answer a rate lookup.
pub trait RateSource: Send + Sync {
    /// Fetches the quotes for `request`.
    fn get_rates(&self, request: &ShippingRequest) -> Result<Vec<CarrierQuote>>;
}

/// Client for the rate calculation endpoint.
pub struct RateRequestClient {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
}

impl RateRequestClient {
    /// Creates a client backed by a blocking `reqwest` transport.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client on top of an existing transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Configuration the client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Convenience wrapper: lookup from the configured origin to `destination_country`.
    pub fn rates_to(&self, destination_country: &str, weight_kg: f64) -> Result<Vec<CarrierQuote>> {
        let request = ShippingRequest::new(destination_country, weight_kg)?;
        self.get_rates(&request)
    }

    fn fetch(&self, request: &ShippingRequest) -> Result<Vec<CarrierQuote>> {
        let authorization = self.config.authorization()?;
        let url = build_url(&self.config.base_url, &self.config.origin_country, request)?;

        info!("Calling rate API: {}", url);

        let mut headers = self.config.headers.clone();
        headers.push((String::from(AUTHORIZATION), authorization));

        let response = self.transport.get(&url, &headers)?;
        if !response.is_success() {
            return Err(ShippingError::Status {
                status: response.status,
                body: response.body,
            });
        }

        let quotes: Vec<CarrierQuote> = serde_json::from_str(&response.body)?;
        info!(
            "Rate API response: status={} options_count={}",
            response.status,
            quotes.len()
        );
        Ok(quotes)
    }
}

impl RateSource for RateRequestClient {
    fn get_rates(&self, request: &ShippingRequest) -> Result<Vec<CarrierQuote>> {
        self.fetch(request).inspect_err(|e| {
            error!("Rate lookup failed ({}): {}", e.kind(), e);
        })
    }
}

/// Builds the calculation URL for `request` under `base_url`, shipping from `origin_country`.
pub fn build_url(base_url: &str, origin_country: &str, request: &ShippingRequest) -> Result<Url> {
    let weight = request.weight_param();
    Url::parse_with_params(
        &calculate_endpoint(base_url),
        &[
            (PARAM_TO_COUNTRY, request.destination_country.as_str()),
            (PARAM_FROM_COUNTRY, origin_country),
            (PARAM_WEIGHT, weight.as_str()),
        ],
    )
    .map_err(|e| ShippingError::Configuration(format!("Invalid base URL {}: {}", base_url, e)))
}
