//! Runs view transitions and the catalog fetches they ask for

use std::sync::Arc;

use super::page::PageView;
use super::state::{Effect, Trigger, ViewState};
use crate::config::CatalogConfig;
use crate::filter::{FilterEngine, FilterState};
use crate::observability::MetricsRegistry;
use crate::record::Record;
use crate::search::{SearchEngine, SuggestOutcome, SuggestRequest, SuggestResponse};
use crate::sort::SortKey;
use crate::store::{CatalogSource, HttpCatalogSource, RecordStore, StoreResult};

/// The component the rendering layer talks to.
///
/// Runs on a single event loop: every method takes `&mut self`, so the
/// working view is never touched concurrently. Fetch failures are logged
/// and returned for inspection; the view keeps its last good state.
pub struct ViewOrchestrator {
    store: RecordStore,
    state: ViewState,
    metrics: Arc<MetricsRegistry>,
}

impl ViewOrchestrator {
    /// Creates an orchestrator over `source` with an empty view
    pub fn new(source: Arc<dyn CatalogSource>, page_size: usize) -> Self {
        Self::with_metrics(source, page_size, Arc::new(MetricsRegistry::new()))
    }

    pub fn with_metrics(
        source: Arc<dyn CatalogSource>,
        page_size: usize,
        metrics: Arc<MetricsRegistry>,
    ) -> Self {
        Self {
            store: RecordStore::new(source, Arc::clone(&metrics)),
            state: ViewState::new(page_size),
            metrics,
        }
    }

    /// Creates an orchestrator talking to the configured HTTP endpoint
    pub fn from_config(config: &CatalogConfig) -> StoreResult<Self> {
        let source = HttpCatalogSource::new(config)?;
        Ok(Self::new(Arc::new(source), config.page_size))
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The working view, before pagination
    pub fn view(&self) -> &[Record] {
        self.state.view()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    // Actions

    /// Fetches the catalog and shows it from page 1
    pub async fn initial_load(&mut self) -> StoreResult<()> {
        self.reload(true).await
    }

    /// Reloads the catalog, discarding every narrowing applied so far
    pub async fn reset(&mut self) -> StoreResult<()> {
        self.handle(Trigger::Reset).await
    }

    /// Records a keystroke and refreshes suggestions for it
    pub async fn input(&mut self, text: impl Into<String>) {
        if let Some(request) = self.begin_suggest(text) {
            let source = self.store.source();
            let response = SearchEngine::suggest(source.as_ref(), request).await;
            self.complete_suggest(response);
        }
    }

    /// Submits the current input: narrows the view, or reloads when blank
    pub async fn submit_search(&mut self) -> StoreResult<()> {
        self.handle(Trigger::SearchSubmitted).await
    }

    pub fn edit_filters(&mut self, filter: FilterState) {
        self.step(Trigger::FiltersEdited(filter));
    }

    /// Narrows the working view by the edited filters
    pub fn apply_filters(&mut self) {
        self.step(Trigger::FiltersApplied);
    }

    pub fn sort_by(&mut self, key: SortKey) {
        self.step(Trigger::SortClicked(key));
    }

    pub fn goto_page(&mut self, page: usize) {
        self.step(Trigger::PageClicked(page));
    }

    pub fn render(&self) -> PageView {
        self.state.render()
    }

    // Split suggestion flow
    //
    // An event loop that must keep handling input while a suggestion fetch
    // is in flight calls `begin_suggest`, runs `SearchEngine::suggest`
    // against `suggestion_source()` on its own, and hands the response to
    // `complete_suggest` whenever it arrives. Responses to outdated input are
    // discarded there.

    /// Records a keystroke; returns the suggestion fetch to run, if any
    pub fn begin_suggest(&mut self, text: impl Into<String>) -> Option<SuggestRequest> {
        match self.step(Trigger::InputChanged(text.into())) {
            Some(Effect::FetchSuggestions(request)) => Some(request),
            _ => None,
        }
    }

    /// Source to run suggestion fetches against
    pub fn suggestion_source(&self) -> Arc<dyn CatalogSource> {
        self.store.source()
    }

    /// Applies a finished suggestion fetch unless it is stale
    pub fn complete_suggest(&mut self, response: SuggestResponse) -> SuggestOutcome {
        let outcome = self.state.search.classify(&response);
        self.step(Trigger::SuggestionsReceived(response));
        outcome
    }

    // Dispatch

    /// Applies any trigger and performs the fetch it requires
    pub async fn handle(&mut self, trigger: Trigger) -> StoreResult<()> {
        match self.step(trigger) {
            None => Ok(()),
            Some(Effect::Reload) => self.reload(false).await,
            Some(Effect::FetchSuggestions(request)) => {
                let source = self.store.source();
                let response = SearchEngine::suggest(source.as_ref(), request).await;
                self.complete_suggest(response);
                Ok(())
            }
        }
    }

    async fn reload(&mut self, initial: bool) -> StoreResult<()> {
        let records = self.store.load().await?;
        self.step(Trigger::SnapshotLoaded { records, initial });
        Ok(())
    }

    fn step(&mut self, trigger: Trigger) -> Option<Effect> {
        self.count(&trigger);

        let state = std::mem::take(&mut self.state);
        let (next, effect) = state.apply(trigger);
        self.state = next;

        if let Some(Effect::FetchSuggestions(_)) = &effect {
            self.metrics.increment_suggestions_requested();
        }
        effect
    }

    fn count(&self, trigger: &Trigger) {
        match trigger {
            Trigger::SuggestionsReceived(response) => match self.state.search.classify(response) {
                SuggestOutcome::Applied => self.metrics.increment_suggestions_applied(),
                SuggestOutcome::Stale => self.metrics.increment_suggestions_stale(),
                SuggestOutcome::Failed => self.metrics.increment_suggestions_failed(),
            },
            Trigger::SearchSubmitted => self.metrics.increment_searches(),
            Trigger::FiltersApplied => {
                self.metrics.increment_filters_applied();
                self.metrics
                    .add_price_parse_failures(FilterEngine::unparseable_count(self.state.view()));
            }
            Trigger::SortClicked(_) => self.metrics.increment_sorts_applied(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StaticCatalogSource;

    fn catalog() -> Vec<Record> {
        vec![
            Record::new(1u64, "Apple", 50.0, "$10", "Fruit", 4.0),
            Record::new(2u64, "Banana", 80.0, "$5", "Fruit", 3.0),
            Record::new(3u64, "Apricot", 30.0, "$oops", "Fruit", 5.0),
        ]
    }

    fn orchestrator() -> (ViewOrchestrator, Arc<StaticCatalogSource>) {
        let source = Arc::new(StaticCatalogSource::new(catalog()));
        (ViewOrchestrator::new(source.clone(), 5), source)
    }

    #[tokio::test]
    async fn test_metrics_follow_actions() {
        let (mut browser, _) = orchestrator();
        browser.initial_load().await.unwrap();

        browser.input("ap").await;
        browser.submit_search().await.unwrap();
        browser.apply_filters();
        browser.sort_by(SortKey::Price);

        let metrics = browser.metrics().snapshot();
        assert_eq!(metrics.loads_succeeded, 1);
        assert_eq!(metrics.suggestions_requested, 1);
        assert_eq!(metrics.suggestions_applied, 1);
        assert_eq!(metrics.searches, 1);
        assert_eq!(metrics.filters_applied, 1);
        assert_eq!(metrics.price_parse_failures, 1);
        assert_eq!(metrics.sorts_applied, 1);
    }

    #[tokio::test]
    async fn test_stale_suggestion_counted_and_dropped() {
        let (mut browser, _) = orchestrator();
        browser.initial_load().await.unwrap();

        let older = browser.begin_suggest("ap").unwrap();
        let newer = browser.begin_suggest("ban").unwrap();

        let source = browser.suggestion_source();
        let newer_response = SearchEngine::suggest(source.as_ref(), newer).await;
        let older_response = SearchEngine::suggest(source.as_ref(), older).await;

        assert_eq!(browser.complete_suggest(newer_response), SuggestOutcome::Applied);
        assert_eq!(browser.complete_suggest(older_response), SuggestOutcome::Stale);

        assert_eq!(browser.render().suggestions, vec!["Banana".to_string()]);
        assert_eq!(browser.metrics().snapshot().suggestions_stale, 1);
    }

    #[tokio::test]
    async fn test_failed_reset_keeps_working_view() {
        let (mut browser, source) = orchestrator();
        browser.initial_load().await.unwrap();
        browser.begin_suggest("ban");
        browser.submit_search().await.unwrap();
        assert_eq!(browser.view().len(), 1);

        source.set_failing(true);
        assert!(browser.reset().await.is_err());

        assert_eq!(browser.view().len(), 1);
        assert_eq!(browser.store().len(), 3);
    }

    #[test]
    fn test_from_config_uses_page_size() {
        let config = CatalogConfig {
            page_size: 7,
            ..CatalogConfig::default()
        };
        let browser = ViewOrchestrator::from_config(&config).unwrap();
        assert_eq!(browser.state().pagination.page_size(), 7);
    }
}
