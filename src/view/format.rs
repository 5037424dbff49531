//! Display formatting
//!
//! The engine stores raw values; everything the presentation layer
//! prints verbatim is derived here so that all frontends agree on the
//! rendered text.

/// Currency code for all catalog prices
pub const CURRENCY: &str = "USD";

/// Compact form of a tier label: the label with all whitespace removed,
/// so "3 GB" and "3GB" render identically.
pub fn format_size_label(label: &str) -> String {
    label.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Price rendered with a dollar sign and two decimals
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Validity period rendered as a day count
pub fn format_duration(days: u32) -> String {
    format!("{} days", days)
}
