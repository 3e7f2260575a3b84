//! ViewOrchestrator subsystem
//!
//! Owns the working view and sequences the pipeline stages on every user
//! action:
//!
//! | Trigger | Effect on the working view |
//! |---|---|
//! | initial load | := snapshot, page 1 |
//! | keystroke | unchanged; suggestions refreshed |
//! | search submit (non-empty) | narrowed by name prefix |
//! | search submit (empty) / reset | := fresh snapshot |
//! | apply filters | narrowed by the filter set |
//! | sort click | reordered |
//! | page click | unchanged; page index set |
//!
//! # Cumulative narrowing
//!
//! Search and filter operate on the current working view, not on the
//! snapshot. Narrowings compound until the next reload; this is the
//! contract, not an accident.
//!
//! # State model
//!
//! [`ViewState::apply`] is deterministic: the same state and trigger always
//! produce the same next state and the same requested [`Effect`]. It does
//! no I/O beyond log lines.
//! [`ViewOrchestrator`] performs the effects (catalog fetches) and feeds
//! their results back in as triggers.

mod orchestrator;
mod page;
mod state;

pub use orchestrator::ViewOrchestrator;
pub use page::{PageRow, PageView};
pub use state::{Effect, Trigger, ViewState};
