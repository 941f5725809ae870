//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use chrono::{DateTime, Utc};
use unicode_width::UnicodeWidthChar;

use crate::api::{AccessDetails, AccessType};
use crate::config::NetworkConfig;

/// Format the price cell for an asset
///
/// # Examples
/// ```
/// use marktui::logic::formatting::format_price;
///
/// assert_eq!(format_price(None), "-");
/// ```
pub fn format_price(details: Option<&AccessDetails>) -> String {
    let Some(details) = details else {
        return "-".to_string();
    };

    match details.access_type {
        AccessType::Free => "Free".to_string(),
        AccessType::Fixed => {
            let symbol = details
                .base_token
                .as_ref()
                .map(|t| t.symbol.as_str())
                .unwrap_or("");
            let price = trim_decimal(&details.price);
            if symbol.is_empty() {
                price
            } else {
                format!("{} {}", price, symbol)
            }
        }
        AccessType::NotSupported => "No pricing schema available".to_string(),
    }
}

/// Drop trailing zeros from a decimal string ("10.500" → "10.5", "3.0" → "3")
fn trim_decimal(value: &str) -> String {
    let value = value.trim();
    if !value.contains('.') {
        return value.to_string();
    }
    value.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Display name for a chain id, preferring the configured name
pub fn network_name(chain_id: u64, networks: &[NetworkConfig]) -> String {
    if let Some(network) = networks.iter().find(|n| n.chain_id == chain_id) {
        return network.name.clone();
    }

    match chain_id {
        1 => "ETH".to_string(),
        5 => "Goerli".to_string(),
        10 => "Optimism".to_string(),
        56 => "BSC".to_string(),
        137 => "Polygon".to_string(),
        246 => "EWC".to_string(),
        1285 => "Moonriver".to_string(),
        80001 => "Mumbai".to_string(),
        11155111 => "Sepolia".to_string(),
        _ => format!("Chain {}", chain_id),
    }
}

/// Truncate to a display width, appending "…" when cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// Format an RFC 3339 publish timestamp as a date, passing other input through
pub fn format_publish_date(created: &str) -> String {
    match created.parse::<DateTime<Utc>>() {
        Ok(ts) => ts.format("%Y-%m-%d").to_string(),
        Err(_) => created.to_string(),
    }
}
