//! Result type alias shared across the workspace.
//!
//! Defaults the error type to `ShippingError`, so functions can simply return
//! `Result<T>`.
use crate::error::ShippingError;

/// Workspace-wide `Result` alias with `ShippingError` as the default error.
pub type Result<T, E = ShippingError> = std::result::Result<T, E>;
