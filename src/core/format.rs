//! Number and date formatting for display

use chrono::{TimeZone, Utc};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

const DECIMAL_PLACES: u32 = 2;

fn to_cents(value: f64) -> Option<Decimal> {
    let mut rounded = Decimal::from_f64(value)?
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.rescale(DECIMAL_PLACES);
    Some(rounded)
}

/// Rounds half away from zero to 2 decimal places.
///
/// Rounding happens in decimal so that values like `1.005` round up as written.
/// Non-finite input is returned unchanged, as are magnitudes beyond the decimal
/// range, which are whole numbers in `f64` anyway.
pub fn round2(value: f64) -> f64 {
    to_cents(value).and_then(|d| d.to_f64()).unwrap_or(value)
}

/// Formats a number with `,` thousands separators and exactly 2 decimals.
pub fn format_amount(value: f64) -> String {
    match to_cents(value) {
        Some(cents) => group_thousands(&cents.to_string()),
        None if value.is_finite() => group_thousands(&format!("{value:.2}")),
        None => format!("{value:.2}"),
    }
}

// Expects a plain `-?digits.digits` rendering
fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{frac_part}")
}

/// Renders a Unix timestamp as `yyyy-MM-dd HH:mm` in UTC.
pub fn format_timestamp(timestamp: i64) -> String {
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}
