//! Projection of carrier quotes into card views.
//!
//! Ordering policy: ascending by `price` (the quote-currency price, not the
//! reference price), stable for equal prices. The input slice is never touched;
//! cards are built from a sorted list of references.
use shipping_common::CarrierQuote;

use crate::model::card::{CardView, PlaceholderView, ShippingLabel};

/// Currency of `CarrierQuote::try_price`.
pub const REFERENCE_CURRENCY: &str = "TRY";

/// Builds card views and the loading placeholder.
pub struct QuotePresenter;

impl QuotePresenter {
    /// Number of skeleton cards shown while loading.
    pub const PLACEHOLDER_CARDS: usize = 3;

    /// Cards for `quotes`, cheapest first.
    pub fn present(quotes: &[CarrierQuote]) -> Vec<CardView> {
        let mut ordered: Vec<&CarrierQuote> = quotes.iter().collect();
        // `sort_by` is stable: equal prices keep response order.
        ordered.sort_by(|a, b| price_key(a.price).total_cmp(&price_key(b.price)));
        ordered.into_iter().map(Self::card).collect()
    }

    /// Card for a single quote.
    pub fn card(quote: &CarrierQuote) -> CardView {
        let label = if quote.is_cheapest_express {
            ShippingLabel::Express
        } else {
            ShippingLabel::Standard
        };
        let reference_price = (quote.try_price != quote.price)
            .then(|| format!("{} {}", quote.try_price, REFERENCE_CURRENCY));

        CardView {
            key: quote.display_key(),
            label,
            transit_time: Self::transit_time(quote.min_transit_time, quote.max_transit_time),
            price: format!("{} {}", quote.price, quote.currency),
            reference_price,
            highlighted: quote.is_cheapest_express,
        }
    }

    /// "{min} days" for a fixed window, "{min}-{max} days" otherwise.
    pub fn transit_time(min_days: u32, max_days: u32) -> String {
        if min_days == max_days {
            format!("{} days", min_days)
        } else {
            format!("{}-{} days", min_days, max_days)
        }
    }

    /// Skeleton shown before the request resolves.
    pub fn loading_view() -> PlaceholderView {
        PlaceholderView::with_cards(Self::PLACEHOLDER_CARDS)
    }
}

/// Sort key for a price; `-0.0` and `0.0` compare equal.
fn price_key(price: f64) -> f64 {
    if price == 0.0 { 0.0 } else { price }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn quote(proposal_id: i64, price: f64, currency: &str) -> CarrierQuote {
        CarrierQuote {
            proposal_id,
            vendor_id: 100 + proposal_id,
            price,
            currency: String::from(currency),
            try_price: price,
            min_transit_time: 2,
            max_transit_time: 4,
            is_cheapest_express: false,
            description: None,
            customer_name: None,
        }
    }

    #[test]
    fn cheapest_first() {
        let quotes = vec![quote(1, 100.0, "EUR"), quote(2, 80.0, "EUR")];
        let cards = QuotePresenter::present(&quotes);

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].key, "2-102");
        assert_eq!(cards[0].price, "80 EUR");
        assert_eq!(cards[1].price, "100 EUR");
    }

    #[test]
    fn equal_prices_keep_response_order() {
        let quotes = vec![
            quote(1, 50.0, "USD"),
            quote(2, 20.0, "USD"),
            quote(3, 50.0, "USD"),
            quote(4, 20.0, "USD"),
        ];
        let keys: Vec<String> = QuotePresenter::present(&quotes)
            .into_iter()
            .map(|card| card.key)
            .collect();

        assert_eq!(keys, vec!["2-102", "4-104", "1-101", "3-103"]);
    }

    #[test]
    fn signed_zero_prices_keep_response_order() {
        let quotes = vec![quote(0, 0.0, "EUR"), quote(1, -0.0, "EUR"), quote(2, 0.0, "EUR")];
        let keys: Vec<String> = QuotePresenter::present(&quotes)
            .into_iter()
            .map(|card| card.key)
            .collect();

        assert_eq!(keys, vec!["0-100", "1-101", "2-102"]);
    }

    #[test]
    fn does_not_mutate_input() {
        let quotes = vec![quote(1, 9.0, "EUR"), quote(2, 3.0, "EUR")];
        let before = quotes.clone();
        let _ = QuotePresenter::present(&quotes);
        assert_eq!(quotes, before);
    }

    #[test]
    fn sorts_by_price_not_reference_price() {
        let mut expensive = quote(1, 10.0, "EUR");
        expensive.try_price = 100.0;
        let mut cheap = quote(2, 20.0, "USD");
        cheap.try_price = 50.0;

        let cards = QuotePresenter::present(&[cheap, expensive]);
        assert_eq!(cards[0].key, "1-101");
    }

    #[rstest]
    #[case(3, 3, "3 days")]
    #[case(0, 0, "0 days")]
    #[case(2, 5, "2-5 days")]
    #[case(1, 2, "1-2 days")]
    fn transit_strings(#[case] min: u32, #[case] max: u32, #[case] expected: &str) {
        assert_eq!(QuotePresenter::transit_time(min, max), expected);
    }

    #[rstest]
    #[case(true, ShippingLabel::Express, "Express Shipping")]
    #[case(false, ShippingLabel::Standard, "Standard Shipping")]
    fn labels(#[case] express: bool, #[case] label: ShippingLabel, #[case] text: &str) {
        let mut q = quote(1, 10.0, "EUR");
        q.is_cheapest_express = express;

        let card = QuotePresenter::card(&q);
        assert_eq!(card.label, label);
        assert_eq!(card.label.to_string(), text);
        assert_eq!(card.highlighted, express);
    }

    #[test]
    fn reference_price_only_when_different() {
        let same = quote(1, 120.0, "TRY");
        assert_eq!(QuotePresenter::card(&same).reference_price, None);

        let mut different = quote(2, 80.5, "EUR");
        different.try_price = 2890.25;
        assert_eq!(
            QuotePresenter::card(&different).reference_price.as_deref(),
            Some("2890.25 TRY")
        );
    }

    #[test]
    fn loading_view_has_three_cards() {
        let view = QuotePresenter::loading_view();
        assert_eq!(view.cards.len(), QuotePresenter::PLACEHOLDER_CARDS);
        assert_eq!(view, QuotePresenter::loading_view());
        let keys: Vec<usize> = view.cards.iter().map(|card| card.key).collect();
        assert_eq!(keys, vec![0, 1, 2]);
    }

    #[test]
    fn card_renders_as_text_line() {
        let mut q = quote(7, 80.0, "EUR");
        q.try_price = 2800.0;
        q.is_cheapest_express = true;

        let line = QuotePresenter::card(&q).to_string();
        assert!(line.starts_with('*'));
        assert!(line.contains("Express Shipping"));
        assert!(line.contains("2-4 days"));
        assert!(line.contains("80 EUR"));
        assert!(line.ends_with("(2800 TRY)"));
    }

    proptest! {
        #[test]
        fn present_is_a_stable_price_sort(prices in prop::collection::vec(0u32..20, 0..40)) {
            let quotes: Vec<CarrierQuote> = prices
                .iter()
                .enumerate()
                .map(|(i, p)| quote(i as i64, f64::from(*p), "EUR"))
                .collect();

            let cards = QuotePresenter::present(&quotes);
            prop_assert_eq!(cards.len(), quotes.len());

            let mut expected: Vec<(u32, usize)> =
                prices.iter().copied().enumerate().map(|(i, p)| (p, i)).collect();
            expected.sort();
            let expected_keys: Vec<String> = expected
                .into_iter()
                .map(|(_, i)| format!("{}-{}", i, 100 + i))
                .collect();
            let keys: Vec<String> = cards.into_iter().map(|card| card.key).collect();
            prop_assert_eq!(keys, expected_keys);
        }
    }
}
