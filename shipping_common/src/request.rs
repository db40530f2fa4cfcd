//! Parameters of a single rate lookup.
//!
//! The origin country is not part of a request: every lookup ships from the
//! origin in `ClientConfig`.
use crate::error::ShippingError;

/// Destination and weight for one rate lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingRequest {
    /// Destination country code (e.g., `DE`).
    pub destination_country: String,
    /// Parcel weight in kilograms.
    pub weight_kg: f64,
}

impl ShippingRequest {
    /// Creates a request.
    ///
    /// The destination is trimmed and must not be empty. The weight is
    /// forwarded as is; bounds are the rate API's business.
    pub fn new(destination_country: &str, weight_kg: f64) -> Result<Self, ShippingError> {
        let destination = destination_country.trim();
        if destination.is_empty() {
            return Err(ShippingError::InvalidRequest(String::from(
                "destination country code is empty",
            )));
        }
        Ok(ShippingRequest {
            destination_country: String::from(destination),
            weight_kg,
        })
    }

    /// Weight as sent on the wire: shortest decimal form, so `2.0` becomes `2`.
    pub fn weight_param(&self) -> String {
        self.weight_kg.to_string()
    }
}
