//! Carrier quote payload returned by the rate API.
//!
//! Quotes arrive as a JSON array with camelCase keys and are decoded via
//! `serde_json`. They are plain values: created per request, never mutated,
//! dropped after rendering.
use serde::{Deserialize, Serialize};

/// One carrier's priced offer for a route and weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierQuote {
    /// Unique id of this offer.
    pub proposal_id: i64,
    /// Carrier/vendor identifier.
    pub vendor_id: i64,
    /// Quoted price in `currency`.
    pub price: f64,
    /// ISO currency code of `price`.
    pub currency: String,
    /// Price expressed in the reference currency (TRY).
    pub try_price: f64,
    /// Shortest transit time in days.
    pub min_transit_time: u32,
    /// Longest transit time in days.
    pub max_transit_time: u32,
    /// Marks the cheapest express option.
    pub is_cheapest_express: bool,
    /// Free-form vendor description.
    #[serde(default)]
    pub description: Option<String>,
    /// Customer name attached by the vendor.
    #[serde(default)]
    pub customer_name: Option<String>,
}

impl CarrierQuote {
    /// Display key, unique per offer: "proposalId-vendorId".
    pub fn display_key(&self) -> String {
        format!("{}-{}", self.proposal_id, self.vendor_id)
    }

    /// `true` when the transit window collapses to a single day count.
    pub fn has_fixed_transit(&self) -> bool {
        self.min_transit_time == self.max_transit_time
    }
}
