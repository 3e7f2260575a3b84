//! catalog_browser - client-side catalog browser core
//!
//! Loads a product catalog from a remote endpoint and runs the in-memory
//! pipeline behind the browsing UI: search → filter → sort → paginate.
//!
//! The rendering layer talks only to [`view::ViewOrchestrator`]; everything
//! else is a stage it sequences.

pub mod config;
pub mod filter;
pub mod observability;
pub mod paginate;
pub mod record;
pub mod search;
pub mod sort;
pub mod store;
pub mod view;

pub use config::CatalogConfig;
pub use record::{Price, Record, RecordId};
pub use view::{PageView, Trigger, ViewOrchestrator, ViewState};
