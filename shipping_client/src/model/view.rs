//! The single value a UI renders for an invocation state.
use std::fmt;

use serde::Serialize;

use crate::model::card::{CardView, PlaceholderView};

/// What to draw: the skeleton, the carrier cards, or an error line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum ShippingView {
    /// Request in flight.
    Loading(PlaceholderView),
    /// Carrier options, already ordered.
    Carriers(Vec<CardView>),
    /// Plain error message in place of the list.
    Error(String),
}

impl fmt::Display for ShippingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShippingView::Loading(placeholder) => write!(f, "{}", placeholder),
            ShippingView::Carriers(cards) if cards.is_empty() => {
                write!(f, "No carrier options available.")
            }
            ShippingView::Carriers(cards) => {
                for (index, card) in cards.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", card)?;
                }
                Ok(())
            }
            ShippingView::Error(message) => write!(f, "{}", message),
        }
    }
}
