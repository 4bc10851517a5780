//! Error types surfaced by the rate client and input validation

use thiserror::Error;

/// Failure of a single quote fetch. Terminal for that request.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid endpoint URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Request error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("HTTP error: {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to decode quote response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// True when the server could not be reached or answered with a non-2xx status.
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network(_) | FetchError::Status(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, FetchError::Decode(_))
    }
}

/// Problems with user input, reported before any request is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a currency and an amount")]
    MissingCurrencyAndAmount,

    #[error("Please select a currency")]
    MissingCurrency,

    #[error("Please enter an amount")]
    MissingAmount,

    #[error("Unsupported currency: {0} (expected one of KRW, JPY, PHP)")]
    UnknownCurrency(String),

    #[error("Amount is not a valid number: {0}")]
    InvalidAmount(String),
}
