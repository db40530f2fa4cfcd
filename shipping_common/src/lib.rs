//!
//! Common types shared by the shipping rate client and its tool surface.
//!
//! This crate aggregates:
//! - `error` — unified error type `ShippingError` and its `FailureKind`.
//! - `result` — handy `Result<T, ShippingError>` alias.
//! - `quote` — `CarrierQuote` as returned by the rate API.
//! - `request` — `ShippingRequest` parameters of one lookup.
//! - `config` — explicit `ClientConfig` (credential, base URL, headers, timeout).
//! - `net` — endpoint constants and the fixed header set.
#![warn(missing_docs)]
pub mod config;
pub mod error;
pub mod net;
pub mod quote;
pub mod request;
pub mod result;

pub use config::ClientConfig;
pub use error::{FAILURE_MESSAGE, FailureKind, ShippingError};
pub use quote::CarrierQuote;
pub use request::ShippingRequest;
pub use result::Result;
