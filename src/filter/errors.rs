//! Filter form errors

use thiserror::Error;

/// Result type for filter form parsing
pub type FilterResult<T> = Result<T, FilterError>;

/// Filter form errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}
