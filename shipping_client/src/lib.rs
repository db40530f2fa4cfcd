//! Shipping rate client for the `calculate_shipping` agent tool.
//!
//! Modules:
//! - `transport` — HTTP seam (`HttpTransport`) and its blocking `reqwest` implementation.
//! - `rate_client` — `RateRequestClient`, which builds the request and decodes quotes.
//! - `model` — card, placeholder and view types for the UI.
//! - `presenter` — `QuotePresenter`, ordering and formatting of quotes.
//! - `invocation` — `Idle -> Loading -> Success | Failed | Cancelled` lifecycle.
//! - `tool` — the `calculate_shipping` tool surface for a host agent runtime.
#![warn(missing_docs)]
pub mod invocation;
pub mod model;
pub mod presenter;
pub mod rate_client;
pub mod tool;
pub mod transport;

pub use invocation::{Invocation, InvocationState, Transition};
pub use presenter::QuotePresenter;
pub use rate_client::{RateRequestClient, RateSource};
pub use tool::{ShippingTool, ToolOutput};
