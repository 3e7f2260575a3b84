//! FilterEngine subsystem
//!
//! Retains records that satisfy every active predicate (AND semantics):
//! price within `[min_price, max_price]`, ratings at least `min_ratings`,
//! and category containing the selected category when one is set.
//!
//! Filtering runs over the current working view, so it compounds with any
//! narrowing already applied until the next reload.

mod engine;
mod errors;
mod state;

pub use engine::FilterEngine;
pub use errors::{FilterError, FilterResult};
pub use state::FilterState;
