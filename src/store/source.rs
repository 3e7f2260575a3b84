//! The seam between the browser core and the remote catalog

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use super::errors::{StoreError, StoreResult};
use crate::record::Record;

/// Boxed future returned by catalog sources
pub type SourceFuture<'a> = Pin<Box<dyn Future<Output = StoreResult<Vec<Record>>> + Send + 'a>>;

/// A remote catalog.
///
/// `fetch_all` returns the full catalog. `fetch_matching` returns records
/// whose name matches `query` under the source's own match semantics; the
/// result is an opaque candidate list used only for suggestions.
pub trait CatalogSource: Send + Sync {
    fn fetch_all(&self) -> SourceFuture<'_>;

    fn fetch_matching<'a>(&'a self, query: &'a str) -> SourceFuture<'a>;
}

/// In-memory catalog source.
///
/// Matches by case-insensitive substring. Can be switched into a failing
/// mode to exercise the non-fatal error paths.
#[derive(Debug, Default)]
pub struct StaticCatalogSource {
    records: Vec<Record>,
    failing: AtomicBool,
    fetches: AtomicUsize,
}

impl StaticCatalogSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            failing: AtomicBool::new(false),
            fetches: AtomicUsize::new(0),
        }
    }

    /// While set, every fetch fails with a network error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of fetches served or refused so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn serve(&self, keep: impl Fn(&Record) -> bool) -> StoreResult<Vec<Record>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Network("static source is offline".to_string()));
        }
        Ok(self.records.iter().filter(|r| keep(r)).cloned().collect())
    }
}

impl CatalogSource for StaticCatalogSource {
    fn fetch_all(&self) -> SourceFuture<'_> {
        let result = self.serve(|_| true);
        Box::pin(async move { result })
    }

    fn fetch_matching<'a>(&'a self, query: &'a str) -> SourceFuture<'a> {
        let needle = query.to_lowercase();
        let result = self.serve(|r| r.name.to_lowercase().contains(&needle));
        Box::pin(async move { result })
    }
}
