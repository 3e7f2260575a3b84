//! Catalog fetch errors
//!
//! Error codes:
//! - CATALOG_NETWORK_FAILED
//! - CATALOG_HTTP_STATUS
//! - CATALOG_DECODE_FAILED
//!
//! None of them is fatal.

use thiserror::Error;

/// Result type for catalog fetches
pub type StoreResult<T> = Result<T, StoreError>;

/// Catalog fetch errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Endpoint unreachable, timed out, or the transfer broke off
    #[error("catalog endpoint unreachable: {0}")]
    Network(String),

    /// Endpoint answered with a non-2xx status
    #[error("catalog endpoint returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// Body was not a JSON array of records
    #[error("catalog response could not be decoded: {0}")]
    Decode(String),
}

impl StoreError {
    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Network(_) => "CATALOG_NETWORK_FAILED",
            StoreError::Status { .. } => "CATALOG_HTTP_STATUS",
            StoreError::Decode(_) => "CATALOG_DECODE_FAILED",
        }
    }

    /// Catalog fetch failures never halt the browser
    pub fn is_fatal(&self) -> bool {
        false
    }
}
