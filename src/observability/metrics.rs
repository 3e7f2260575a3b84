//! Metrics registry
//!
//! - Counters only, plus the size of the current snapshot
//! - Monotonic increase
//! - Reset only when a new registry is created

use std::sync::atomic::{AtomicU64, Ordering};

/// Operational counters for one browsing session
///
/// All counters use relaxed atomics; exact cross-counter consistency is not
/// required for reporting.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    loads_started: AtomicU64,
    loads_succeeded: AtomicU64,
    loads_failed: AtomicU64,
    snapshot_records: AtomicU64,
    suggestions_requested: AtomicU64,
    suggestions_applied: AtomicU64,
    suggestions_stale: AtomicU64,
    suggestions_failed: AtomicU64,
    searches: AtomicU64,
    filters_applied: AtomicU64,
    price_parse_failures: AtomicU64,
    sorts_applied: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    // Loads

    pub fn increment_loads_started(&self) {
        self.loads_started.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful load and the size of the snapshot it produced
    pub fn record_load_success(&self, records: usize) {
        self.loads_succeeded.fetch_add(1, Ordering::Relaxed);
        self.snapshot_records.store(records as u64, Ordering::Relaxed);
    }

    pub fn increment_loads_failed(&self) {
        self.loads_failed.fetch_add(1, Ordering::Relaxed);
    }

    // Suggestions

    pub fn increment_suggestions_requested(&self) {
        self.suggestions_requested.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_suggestions_applied(&self) {
        self.suggestions_applied.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_suggestions_stale(&self) {
        self.suggestions_stale.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_suggestions_failed(&self) {
        self.suggestions_failed.fetch_add(1, Ordering::Relaxed);
    }

    // Pipeline stages

    pub fn increment_searches(&self) {
        self.searches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_filters_applied(&self) {
        self.filters_applied.fetch_add(1, Ordering::Relaxed);
    }

    /// Add records skipped because their price did not parse
    pub fn add_price_parse_failures(&self, count: usize) {
        self.price_parse_failures
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn increment_sorts_applied(&self) {
        self.sorts_applied.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            loads_started: self.loads_started.load(Ordering::Relaxed),
            loads_succeeded: self.loads_succeeded.load(Ordering::Relaxed),
            loads_failed: self.loads_failed.load(Ordering::Relaxed),
            snapshot_records: self.snapshot_records.load(Ordering::Relaxed),
            suggestions_requested: self.suggestions_requested.load(Ordering::Relaxed),
            suggestions_applied: self.suggestions_applied.load(Ordering::Relaxed),
            suggestions_stale: self.suggestions_stale.load(Ordering::Relaxed),
            suggestions_failed: self.suggestions_failed.load(Ordering::Relaxed),
            searches: self.searches.load(Ordering::Relaxed),
            filters_applied: self.filters_applied.load(Ordering::Relaxed),
            price_parse_failures: self.price_parse_failures.load(Ordering::Relaxed),
            sorts_applied: self.sorts_applied.load(Ordering::Relaxed),
        }
    }

    /// Current snapshot as a JSON object
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }
}

/// A point-in-time copy of all metrics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct MetricsSnapshot {
    pub loads_started: u64,
    pub loads_succeeded: u64,
    pub loads_failed: u64,
    pub snapshot_records: u64,
    pub suggestions_requested: u64,
    pub suggestions_applied: u64,
    pub suggestions_stale: u64,
    pub suggestions_failed: u64,
    pub searches: u64,
    pub filters_applied: u64,
    pub price_parse_failures: u64,
    pub sorts_applied: u64,
}
