//! Command-line arguments for the shipping rate client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::time::Duration;

use clap::Parser;
use shipping_common::ClientConfig;
use shipping_common::config::DEFAULT_TIMEOUT_SECS;
use shipping_common::net::{DEFAULT_BASE_URL, DEFAULT_ORIGIN_COUNTRY, TOKEN_ENV_VAR};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Destination country code (e.g., DE, FR, US).
    #[clap(long)]
    pub to_country: String,

    /// Parcel weight in kilograms.
    #[clap(long)]
    pub weight: f64,

    /// Origin country code.
    #[clap(long, default_value = DEFAULT_ORIGIN_COUNTRY)]
    pub from_country: String,

    /// Rate API base URL.
    #[clap(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Bearer token for the rate API.
    #[clap(long, env = TOKEN_ENV_VAR, hide_env_values = true)]
    pub api_token: Option<String>,

    /// Request timeout in seconds.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Print the raw tool output (JSON quotes or error text) instead of cards.
    #[clap(long)]
    pub json: bool,
}

impl Args {
    /// Client configuration described by these arguments.
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::default()
            .with_base_url(self.base_url.trim())
            .with_origin_country(self.from_country.trim())
            .with_timeout(Duration::from_secs(self.timeout_secs));
        match &self.api_token {
            Some(token) => config.with_token(token),
            None => config,
        }
    }
}
