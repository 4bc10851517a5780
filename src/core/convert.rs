//! Conversion of USD amounts into a target currency.
use crate::core::currency::Currency;
use crate::core::error::ValidationError;
use crate::core::format::{format_amount, round2};
use crate::core::quote::ExchangeQuote;
use std::ops::RangeInclusive;
use tracing::debug;

/// Amounts outside this range are still converted, but flagged.
pub const VALID_AMOUNT_RANGE: RangeInclusive<f64> = 0.0..=10_000.0;

/// A validated conversion request built from raw user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub target: Currency,
    pub amount: f64,
}

impl ConversionRequest {
    /// Validates raw input before any rates are fetched.
    ///
    /// Blank or absent fields count as missing. `0` is a valid amount.
    pub fn parse(currency: Option<&str>, amount: Option<&str>) -> Result<Self, ValidationError> {
        let currency = currency.map(str::trim).filter(|s| !s.is_empty());
        let amount = amount.map(str::trim).filter(|s| !s.is_empty());

        let (currency, amount) = match (currency, amount) {
            (None, None) => return Err(ValidationError::MissingCurrencyAndAmount),
            (None, Some(_)) => return Err(ValidationError::MissingCurrency),
            (Some(_), None) => return Err(ValidationError::MissingAmount),
            (Some(c), Some(a)) => (c, a),
        };

        let target = currency.parse::<Currency>()?;
        let amount = amount
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite())
            .ok_or_else(|| ValidationError::InvalidAmount(amount.to_string()))?;

        Ok(Self { target, amount })
    }

    pub fn apply(&self, quote: &ExchangeQuote) -> ConversionResult {
        convert(quote, self.target, self.amount)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub target: Currency,
    pub amount: f64,
    /// Quoted rate rounded to 2 decimals. This is the rate the amount is converted with.
    pub rate: f64,
    pub converted_amount: f64,
    pub formatted_rate: String,
    pub formatted_amount: String,
    pub amount_in_range: bool,
}

/// Converts `amount` USD into `target` using the rounded quoted rate.
pub fn convert(quote: &ExchangeQuote, target: Currency, amount: f64) -> ConversionResult {
    let rate = round2(quote.rate(target));
    let converted_amount = rate * amount;
    debug!(%target, rate, amount, converted_amount, "Converted amount");

    ConversionResult {
        target,
        amount,
        rate,
        converted_amount,
        formatted_rate: format_amount(rate),
        formatted_amount: format_amount(converted_amount),
        amount_in_range: VALID_AMOUNT_RANGE.contains(&amount),
    }
}
