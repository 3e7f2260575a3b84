//! RecordStore subsystem
//!
//! Holds the authoritative snapshot of the catalog as last fetched and
//! talks to the external catalog endpoint through [`CatalogSource`].
//!
//! # Failure model
//!
//! Every fetch failure is non-fatal: it is logged and counted, the previous
//! snapshot (or the empty one) stays in place, and the error is handed back
//! to the caller for inspection only.

mod errors;
mod http;
mod record_store;
mod source;

pub use errors::{StoreError, StoreResult};
pub use http::HttpCatalogSource;
pub use record_store::{load_matching, RecordStore};
pub use source::{CatalogSource, SourceFuture, StaticCatalogSource};
