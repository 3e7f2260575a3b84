//! Catalog browser configuration
//!
//! The only environment the core needs is where the catalog lives, how long
//! to wait for it, and how many rows a page shows.

mod errors;
mod settings;

pub use errors::{ConfigError, ConfigResult};
pub use settings::CatalogConfig;
