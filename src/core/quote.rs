//! Quote types and the provider abstraction

use crate::core::currency::Currency;
use crate::core::error::FetchError;
use async_trait::async_trait;
use serde::Deserialize;

/// USD rates for every supported currency. Decoding fails unless all three are present.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rates {
    #[serde(rename = "USDPHP")]
    pub usd_php: f64,
    #[serde(rename = "USDKRW")]
    pub usd_krw: f64,
    #[serde(rename = "USDJPY")]
    pub usd_jpy: f64,
}

impl Rates {
    pub fn get(&self, currency: Currency) -> f64 {
        match currency {
            Currency::KRW => self.usd_krw,
            Currency::JPY => self.usd_jpy,
            Currency::PHP => self.usd_php,
        }
    }
}

/// A snapshot of live rates, created fresh by every fetch.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ExchangeQuote {
    pub timestamp: i64,
    #[serde(rename = "quotes")]
    pub rates: Rates,
}

impl ExchangeQuote {
    pub fn rate(&self, currency: Currency) -> f64 {
        self.rates.get(currency)
    }
}

#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn fetch_quotes(&self) -> Result<ExchangeQuote, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_quote_payload() {
        let json = r#"{
            "success": true,
            "timestamp": 1700000000,
            "source": "USD",
            "quotes": {"USDKRW": 1318.456, "USDJPY": 147.123, "USDPHP": 56.789}
        }"#;
        let quote: ExchangeQuote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.timestamp, 1700000000);
        assert_eq!(quote.rate(Currency::KRW), 1318.456);
        assert_eq!(quote.rate(Currency::JPY), 147.123);
        assert_eq!(quote.rate(Currency::PHP), 56.789);
    }

    #[test]
    fn test_decode_rejects_partial_quotes() {
        let json = r#"{"timestamp": 1700000000, "quotes": {"USDKRW": 1318.456, "USDJPY": 147.123}}"#;
        assert!(serde_json::from_str::<ExchangeQuote>(json).is_err());
    }

    #[test]
    fn test_decode_rejects_non_numeric_rate() {
        let json = r#"{"timestamp": 1, "quotes": {"USDKRW": "n/a", "USDJPY": 1.0, "USDPHP": 1.0}}"#;
        assert!(serde_json::from_str::<ExchangeQuote>(json).is_err());
    }
}
