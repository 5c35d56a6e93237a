//! ISO 4217 currency codes.
//!
//! Money amounts carry a [`Currency`], a validated alphabetic code taken from
//! a static table. Ringgit is the only currency the VAT layer uses, but the
//! primitive accepts any listed code so arithmetic across currencies can be
//! rejected instead of silently mixed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, de};

use super::error::MoneyError;

/// A known ISO 4217 currency code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Currency(&'static str);

impl Currency {
    /// Malaysian Ringgit.
    pub const MYR: Currency = Currency("MYR");

    /// The three-letter code, e.g. `"MYR"`.
    pub fn code(&self) -> &'static str {
        self.0
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s)
            .map(Currency)
            .ok_or_else(|| MoneyError::UnknownCurrency(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

impl TryFrom<String> for Currency {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0.to_string()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Check whether `code` is a known ISO 4217 currency code.
///
/// Case and surrounding whitespace are ignored, as in `str::parse::<Currency>`.
pub fn is_known_currency_code(code: &str) -> bool {
    lookup(code).is_some()
}

fn lookup(code: &str) -> Option<&'static str> {
    let code = code.trim().to_ascii_uppercase();
    CURRENCY_CODES
        .binary_search(&code.as_str())
        .ok()
        .map(|idx| CURRENCY_CODES[idx])
}

/// Sorted for binary search.
static CURRENCY_CODES: &[&str] = &[
    "AED", // UAE Dirham
    "AUD", // Australian Dollar
    "BDT", // Bangladeshi Taka
    "BND", // Brunei Dollar
    "CAD", // Canadian Dollar
    "CHF", // Swiss Franc
    "CNY", // Chinese Yuan
    "EUR", // Euro
    "GBP", // Pound Sterling
    "HKD", // Hong Kong Dollar
    "IDR", // Indonesian Rupiah
    "INR", // Indian Rupee
    "JPY", // Japanese Yen
    "KHR", // Cambodian Riel
    "KRW", // South Korean Won
    "LAK", // Lao Kip
    "MMK", // Myanmar Kyat
    "MYR", // Malaysian Ringgit
    "NZD", // New Zealand Dollar
    "PHP", // Philippine Peso
    "PKR", // Pakistani Rupee
    "SAR", // Saudi Riyal
    "SGD", // Singapore Dollar
    "THB", // Thai Baht
    "TWD", // New Taiwan Dollar
    "USD", // US Dollar
    "VND", // Vietnamese Dong
];
