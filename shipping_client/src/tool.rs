//! `calculate_shipping` tool exposed to a host agent runtime.
//!
//! The host calls the tool with `{ "toCountry": "DE", "weight": 2.5 }` and gets
//! back either the quotes as a JSON string or the plain-text failure message.
//! UI updates are the invocation states published on the listener channel;
//! `InvocationState::view` turns each one into something drawable.
use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use log::{error, info, warn};
use serde::Deserialize;
use serde_json::{Value, json};
use shipping_common::{FAILURE_MESSAGE, ShippingError, ShippingRequest};

use crate::invocation::{Invocation, InvocationState};
use crate::rate_client::RateSource;

/// Tool name the host runtime dispatches on.
pub const TOOL_NAME: &str = "calculate_shipping";
/// Tool description shown to the model.
pub const TOOL_DESCRIPTION: &str = "Calculate shipping costs between countries with weight. Returns available carrier options with prices and transit times.";

/// Arguments of a `calculate_shipping` call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInput {
    /// Destination country code (e.g., DE, FR, US).
    pub to_country: String,
    /// Parcel weight in kilograms.
    pub weight: f64,
}

/// Result handed back to the host runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// Quotes serialized as a JSON array, in response order.
    Json(String),
    /// Plain-text failure message.
    Error(String),
    /// The call was cancelled; nothing to report.
    Cancelled,
}

impl ToolOutput {
    /// Text returned to the model, if any.
    pub fn into_text(self) -> Option<String> {
        match self {
            ToolOutput::Json(text) | ToolOutput::Error(text) => Some(text),
            ToolOutput::Cancelled => None,
        }
    }
}

/// The shipping calculator tool.
pub struct ShippingTool {
    invocation: Invocation,
}

impl ShippingTool {
    /// Creates the tool over `source`.
    pub fn new(source: Arc<dyn RateSource>) -> Self {
        Self {
            invocation: Invocation::new(source),
        }
    }

    /// Name, description and JSON schema of the tool parameters.
    pub fn definition() -> Value {
        json!({
            "name": TOOL_NAME,
            "description": TOOL_DESCRIPTION,
            "parameters": {
                "type": "object",
                "properties": {
                    "toCountry": {
                        "type": "string",
                        "description": "The destination country code (e.g., DE, FR, US)"
                    },
                    "weight": {
                        "type": "number",
                        "description": "The weight of the package in kilograms"
                    }
                },
                "required": ["toCountry", "weight"]
            }
        })
    }

    /// Handles one tool call.
    ///
    /// Malformed arguments fail without entering `Loading`. Otherwise the
    /// listener sees `Loading` followed by exactly one terminal state.
    pub fn call(
        &self,
        arguments: Value,
        listener: &Sender<InvocationState>,
        cancel: Option<&Receiver<()>>,
    ) -> ToolOutput {
        let request = match parse_request(arguments) {
            Ok(request) => request,
            Err(e) => {
                warn!("Rejected {} arguments: {}", TOOL_NAME, e);
                return ToolOutput::Error(String::from(e.user_message()));
            }
        };
        info!(
            "{} called: to={} weight={}",
            TOOL_NAME, request.destination_country, request.weight_kg
        );

        match self.invocation.run(request, listener, cancel) {
            Ok(InvocationState::Success(quotes)) => match serde_json::to_string(&quotes) {
                Ok(json) => ToolOutput::Json(json),
                Err(e) => {
                    error!("Failed to serialize quotes: {}", e);
                    ToolOutput::Error(String::from(FAILURE_MESSAGE))
                }
            },
            Ok(InvocationState::Failed(message)) => ToolOutput::Error(message),
            Ok(InvocationState::Cancelled) => ToolOutput::Cancelled,
            Ok(state) => {
                error!("Invocation ended in non-terminal state {}", state.name());
                ToolOutput::Error(String::from(FAILURE_MESSAGE))
            }
            Err(e) => {
                error!("Invocation failed ({}): {}", e.kind(), e);
                ToolOutput::Error(String::from(e.user_message()))
            }
        }
    }
}

fn parse_request(arguments: Value) -> Result<ShippingRequest, ShippingError> {
    let input: ToolInput = serde_json::from_value(arguments)
        .map_err(|e| ShippingError::InvalidRequest(e.to_string()))?;
    ShippingRequest::new(&input.to_country, input.weight)
}
