//! Currency-formatted prices

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::{PriceParseError, PriceResult};

const CURRENCY_SYMBOL: char = '$';

/// A price as delivered by the catalog (`"$10"`) together with its parsed
/// amount.
///
/// Serializes back to the raw string, so records round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Price {
    raw: String,
    amount: Option<f64>,
}

impl Price {
    /// Parses a raw price string. Never fails; see [`Price::amount`].
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let amount = parse_amount(&raw).ok();
        Self { raw, amount }
    }

    /// The price as displayed, e.g. `"$10"`
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The numeric amount, or why there is none
    pub fn amount(&self) -> PriceResult<f64> {
        match self.amount {
            Some(value) => Ok(value),
            None => Err(parse_amount(&self.raw)
                .err()
                .unwrap_or_else(|| PriceParseError::Malformed(self.raw.clone()))),
        }
    }

    /// The numeric amount if it parsed
    pub fn value(&self) -> Option<f64> {
        self.amount
    }

    pub fn is_parsed(&self) -> bool {
        self.amount.is_some()
    }
}

impl From<String> for Price {
    fn from(raw: String) -> Self {
        Self::parse(raw)
    }
}

impl From<&str> for Price {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.raw
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Strips one leading currency symbol and parses the rest as a decimal.
///
/// Surrounding whitespace is ignored on both sides of the symbol.
pub fn parse_amount(raw: &str) -> PriceResult<f64> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix(CURRENCY_SYMBOL)
        .unwrap_or(trimmed)
        .trim();

    if digits.is_empty() {
        return Err(PriceParseError::Empty);
    }

    let value: f64 = digits
        .parse()
        .map_err(|_| PriceParseError::Malformed(raw.to_string()))?;

    if !value.is_finite() {
        return Err(PriceParseError::NonFinite(raw.to_string()));
    }

    Ok(value)
}
