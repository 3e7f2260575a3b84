//! SortEngine subsystem
//!
//! Reorders a view by one key; never adds or removes records.
//!
//! - Price: ascending by parsed amount; unparseable prices go last
//! - Popularity, ratings: descending
//!
//! Sorting is stable, so equal keys keep their input order and sorting twice
//! by the same key changes nothing.

mod engine;
mod key;

pub use engine::SortEngine;
pub use key::{SortKey, SortState};
