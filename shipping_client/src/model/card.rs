//! Card-shaped projections of carrier quotes.
//!
//! A `CardView` holds display-ready strings only; no styling decisions are made
//! here. `PlaceholderView` is the data-independent skeleton shown while a
//! request is in flight.
use std::fmt;

use serde::Serialize;
use strum_macros::Display;

/// Service class shown as the card title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum ShippingLabel {
    /// The cheapest express option.
    #[strum(serialize = "Express Shipping")]
    #[serde(rename = "Express Shipping")]
    Express,
    /// Every other option.
    #[strum(serialize = "Standard Shipping")]
    #[serde(rename = "Standard Shipping")]
    Standard,
}

/// One rendered carrier option.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    /// Display key, "proposalId-vendorId".
    pub key: String,
    /// Express or standard.
    pub label: ShippingLabel,
    /// "3 days" or "3-5 days".
    pub transit_time: String,
    /// Price in the quote currency, e.g. "80 EUR".
    pub price: String,
    /// Price in the reference currency, present only when it differs.
    pub reference_price: Option<String>,
    /// Set for the cheapest express option.
    pub highlighted: bool,
}

impl fmt::Display for CardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.highlighted { '*' } else { ' ' };
        write!(
            f,
            "{} {:<18} {:<10} {:>14}",
            marker,
            self.label.to_string(),
            self.transit_time,
            self.price
        )?;
        if let Some(reference) = &self.reference_price {
            write!(f, "  ({})", reference)?;
        }
        Ok(())
    }
}

/// Skeleton bar widths of a placeholder card: title, transit, price, reference.
const SKELETON_WIDTHS: [usize; 4] = [32, 24, 24, 20];

/// Empty-shaped card used while loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderCard {
    /// Position of the card in the placeholder list.
    pub key: usize,
    /// Relative widths of the skeleton bars.
    pub bars: [usize; 4],
}

/// Fixed-size list of placeholder cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderView {
    /// The placeholder cards, in display order.
    pub cards: Vec<PlaceholderCard>,
}

impl PlaceholderView {
    /// Creates `count` placeholder cards.
    pub fn with_cards(count: usize) -> Self {
        let cards = (0..count)
            .map(|key| PlaceholderCard {
                key,
                bars: SKELETON_WIDTHS,
            })
            .collect();
        Self { cards }
    }
}

impl fmt::Display for PlaceholderView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let [title, transit, price, reference] = card.bars.map(|width| "░".repeat(width / 4));
            write!(f, "  {:<10} {:<8} {:>8}  {}", title, transit, price, reference)?;
        }
        Ok(())
    }
}
