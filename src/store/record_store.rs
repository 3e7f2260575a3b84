//! Authoritative catalog snapshot

use std::sync::Arc;

use super::errors::StoreResult;
use super::source::CatalogSource;
use crate::observability::{Event, Logger, MetricsRegistry};
use crate::record::Record;

/// Holds the catalog as most recently fetched.
///
/// Created empty; replaced wholesale by each successful [`RecordStore::load`].
/// Downstream stages only ever see it read-only.
pub struct RecordStore {
    source: Arc<dyn CatalogSource>,
    snapshot: Arc<[Record]>,
    metrics: Arc<MetricsRegistry>,
}

impl RecordStore {
    /// Creates an empty store over `source`
    pub fn new(source: Arc<dyn CatalogSource>, metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            source,
            snapshot: Arc::from(Vec::new()),
            metrics,
        }
    }

    /// The current snapshot
    pub fn snapshot(&self) -> Arc<[Record]> {
        Arc::clone(&self.snapshot)
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// The source this store fetches from
    pub fn source(&self) -> Arc<dyn CatalogSource> {
        Arc::clone(&self.source)
    }

    /// Fetches the full catalog and replaces the snapshot.
    ///
    /// On failure the previous snapshot is retained and the error is
    /// returned for inspection.
    pub async fn load(&mut self) -> StoreResult<Arc<[Record]>> {
        self.metrics.increment_loads_started();
        Logger::info(Event::CatalogLoadBegin, &[]);

        match self.source.fetch_all().await {
            Ok(records) => {
                self.snapshot = Arc::from(records);
                self.metrics.record_load_success(self.snapshot.len());
                Logger::info(
                    Event::CatalogLoadComplete,
                    &[("records", &self.snapshot.len().to_string())],
                );
                Ok(self.snapshot())
            }
            Err(err) => {
                self.metrics.increment_loads_failed();
                Logger::error(
                    Event::CatalogLoadFailed,
                    &[
                        ("code", err.code()),
                        ("reason", &err.to_string()),
                        ("retained", &self.snapshot.len().to_string()),
                    ],
                );
                Err(err)
            }
        }
    }

    /// Fetches suggestion candidates; never touches the snapshot
    pub async fn load_matching(&self, query: &str) -> StoreResult<Vec<Record>> {
        load_matching(self.source.as_ref(), query).await
    }
}

/// Fetches records matching `query` from `source`, logging failures.
///
/// Usable without borrowing a [`RecordStore`], so suggestion fetches can run
/// while the store is busy with other transitions.
pub async fn load_matching(source: &dyn CatalogSource, query: &str) -> StoreResult<Vec<Record>> {
    let result = source.fetch_matching(query).await;
    if let Err(err) = &result {
        Logger::error(
            Event::SuggestionsFailed,
            &[
                ("code", err.code()),
                ("query", query),
                ("reason", &err.to_string()),
            ],
        );
    }
    result
}
