//! Core business logic abstractions

pub mod config;
pub mod convert;
pub mod currency;
pub mod error;
pub mod format;
pub mod log;
pub mod quote;

// Re-export main types for cleaner imports
pub use convert::{ConversionRequest, ConversionResult, convert};
pub use currency::Currency;
pub use error::{FetchError, ValidationError};
pub use quote::{ExchangeQuote, QuoteProvider, Rates};
