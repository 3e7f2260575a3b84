//! Price parsing errors

use thiserror::Error;

/// Result type for price parsing
pub type PriceResult<T> = Result<T, PriceParseError>;

/// Why a price string could not be turned into an amount.
///
/// Always fail-soft: the record stays in the snapshot and is only skipped by
/// numeric comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceParseError {
    #[error("price is empty")]
    Empty,

    #[error("price is not a decimal number: {0:?}")]
    Malformed(String),

    #[error("price is not finite: {0:?}")]
    NonFinite(String),
}
