//! Observability subsystem
//!
//! Provides:
//! - Structured logging (JSON lines)
//! - Session counters
//! - Typed lifecycle events
//!
//! # Principles
//!
//! 1. Observability is read-only: it never changes what the user sees
//! 2. No async or background threads
//! 3. Failures are reported here, never raised to the rendering layer
//!
//! # Usage
//!
//! ```ignore
//! use catalog_browser::observability::{Event, Logger, MetricsRegistry};
//!
//! Logger::info(Event::CatalogLoadComplete, &[("records", "42")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_loads_started();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
