//! Field parsing for seed rows and typed-in values.
//!
//! Contains pure functions that turn the text forms of price, quantity
//! and date into their stored representation.

use crate::error::{InventoryError, Result};
use crate::models::Cents;
use chrono::NaiveDate;
use log::debug;

/// Date format used by the seed file
pub const SEED_DATE_FORMAT: &str = "%m/%d/%Y";

/// Strips `$` from both ends and drops every decimal point.
fn strip_currency(text: &str) -> String {
    text.trim().trim_matches('$').replace('.', "")
}

fn parse_digits(digits: &str, original: &str) -> Result<Cents> {
    // u32::from_str accepts a leading '+', which is not a price
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InventoryError::MalformedPrice(original.to_string()));
    }
    digits
        .parse::<u32>()
        .map(Cents)
        .map_err(|_| InventoryError::MalformedPrice(original.to_string()))
}

/// Parses a seed-file price such as `$1.50` into cents.
///
/// The currency symbol and decimal point are removed and the remaining
/// digits are read as subunits, so `$1.50` becomes 150.
pub fn parse_seed_price(text: &str) -> Result<Cents> {
    let digits = strip_currency(text);
    let cents = parse_digits(&digits, text)?;
    debug!("Parsed seed price '{text}' as {} cents", cents.value());
    Ok(cents)
}

/// Parses a price typed into the add flow.
///
/// Same stripping as [`parse_seed_price`], but when fewer than three
/// characters remain `"00"` is appended first: `$1` is 100 and `$15` is
/// 1500. The two rules differ on inputs like `$1.5` (1500 here, 15 from
/// the seed parser). An empty entry is malformed, never zero.
pub fn parse_entered_price(text: &str) -> Result<Cents> {
    let mut digits = strip_currency(text);
    if digits.is_empty() {
        return Err(InventoryError::MalformedPrice(text.to_string()));
    }
    if digits.chars().count() < 3 {
        digits.push_str("00");
    }
    let cents = parse_digits(&digits, text)?;
    debug!("Parsed entered price '{text}' as {} cents", cents.value());
    Ok(cents)
}

/// Trims a product name, rejecting one that is blank.
pub fn parse_name(text: &str) -> Result<String> {
    let name = text.trim();
    if name.is_empty() {
        return Err(InventoryError::MalformedName(text.to_string()));
    }
    Ok(name.to_string())
}

/// Parses a non-negative unit count.
pub fn parse_quantity(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InventoryError::MalformedQuantity(text.to_string()));
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| InventoryError::MalformedQuantity(text.to_string()))
}

/// Parses a `MM/DD/YYYY` date.
pub fn parse_seed_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), SEED_DATE_FORMAT)
        .map_err(|_| InventoryError::MalformedDate(text.to_string()))
}

#[cfg(test)]
#[path = "parsing_tests.rs"]
mod tests;
