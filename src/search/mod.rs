//! SearchEngine subsystem
//!
//! Two operations:
//! - Suggest: live name suggestions fetched from the catalog source while
//!   the user types
//! - Search: narrow the current working view to names starting with the
//!   submitted query (case-insensitive, order preserving)
//!
//! Suggestion responses are tagged with the generation of the input that
//! triggered them; a response whose generation is no longer current is
//! discarded instead of overwriting a fresher list.

mod engine;
mod state;

pub use engine::SearchEngine;
pub use state::{SearchState, SuggestOutcome, SuggestRequest, SuggestResponse};
