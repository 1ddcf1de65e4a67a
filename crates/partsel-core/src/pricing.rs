//! # Price Parsing
//!
//! Catalog prices are display strings such as `"$25-35"` or `"$1,200"`.
//! The unit price of a range is its lower bound.

/// Parse the unit price out of a display price.
///
/// Takes the text before the first `-`, drops `$` and thousands separators,
/// and parses the rest. Returns `None` for anything that is not a finite,
/// non-negative number.
#[must_use]
pub fn unit_price(price: &str) -> Option<f64> {
    let head = price.split('-').next().unwrap_or(price);
    let cleaned: String = head.chars().filter(|c| *c != '$' && *c != ',').collect();
    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

/// Unit price times quantity, if the price parses.
#[must_use]
pub fn line_total(price: &str, quantity: u32) -> Option<f64> {
    unit_price(price).map(|unit| unit * f64::from(quantity))
}

/// Money as shown in carts and BOMs: two decimals.
#[must_use]
pub fn format_money(amount: f64) -> String {
    format!("{amount:.2}")
}
