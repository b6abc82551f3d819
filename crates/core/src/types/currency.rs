//! ISO 4217 currency codes.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes with dedicated display symbols.
///
/// Codes outside this set are still accepted by the formatting helpers;
/// they are rendered with the code as prefix instead of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
    JPY,
    CNY,
    INR,
}

impl CurrencyCode {
    /// The three-letter ISO code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
            Self::JPY => "JPY",
            Self::CNY => "CNY",
            Self::INR => "INR",
        }
    }

    /// Symbol used by `en-US` currency formatting.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::CAD => "CA$",
            Self::AUD => "A$",
            Self::JPY => "¥",
            Self::CNY => "CN¥",
            Self::INR => "₹",
        }
    }

    /// Number of fraction digits shown for this currency.
    #[must_use]
    pub const fn minor_units(&self) -> u32 {
        match self {
            Self::JPY => 0,
            _ => 2,
        }
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = String;

    /// Parses an ISO code, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            "JPY" => Ok(Self::JPY),
            "CNY" => Ok(Self::CNY),
            "INR" => Ok(Self::INR),
            _ => Err(format!("unsupported currency code: {s}")),
        }
    }
}
