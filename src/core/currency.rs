//! Supported target currencies

use crate::core::error::ValidationError;
use std::fmt::Display;
use std::str::FromStr;

/// Currency every quote is expressed against.
pub const BASE_CURRENCY: &str = "USD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Currency {
    KRW,
    JPY,
    PHP,
}

impl Currency {
    /// All supported currencies, in display order.
    pub const ALL: [Currency; 3] = [Currency::KRW, Currency::JPY, Currency::PHP];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::KRW => "KRW",
            Currency::JPY => "JPY",
            Currency::PHP => "PHP",
        }
    }

    /// Key of this currency's rate in a quote payload, e.g. `USDKRW`.
    pub fn pair_key(&self) -> &'static str {
        match self {
            Currency::KRW => "USDKRW",
            Currency::JPY => "USDJPY",
            Currency::PHP => "USDPHP",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Currency::KRW => "Korea (KRW)",
            Currency::JPY => "Japan (JPY)",
            Currency::PHP => "Philippines (PHP)",
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| {
                c.code().eq_ignore_ascii_case(input) || c.label().eq_ignore_ascii_case(input)
            })
            .ok_or_else(|| ValidationError::UnknownCurrency(input.to_string()))
    }
}
