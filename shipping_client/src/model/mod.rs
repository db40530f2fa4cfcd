//! View models handed to whatever renders the tool result.
//!
//! - `card` — `CardView`, `ShippingLabel` and the loading placeholder shapes.
//! - `view` — `ShippingView`, the single value a UI draws for a given state.
pub mod card;
pub mod view;
