//! Explicit view state and its transitions

use std::sync::Arc;

use super::page::{PageRow, PageView};
use crate::filter::{FilterEngine, FilterState};
use crate::observability::{Event, Logger};
use crate::paginate::{PaginationState, Paginator};
use crate::record::Record;
use crate::search::{SearchEngine, SearchState, SuggestOutcome, SuggestRequest, SuggestResponse};
use crate::sort::{SortEngine, SortKey, SortState};

/// A user action or the arrival of fetched data
#[derive(Debug, Clone)]
pub enum Trigger {
    /// A full catalog fetch succeeded. `initial` resets the page to 1.
    SnapshotLoaded {
        records: Arc<[Record]>,
        initial: bool,
    },
    /// The search input changed
    InputChanged(String),
    /// A suggestion fetch finished
    SuggestionsReceived(SuggestResponse),
    /// The search form was submitted with the current input
    SearchSubmitted,
    /// The reset button was clicked
    Reset,
    /// A filter input changed; not applied yet
    FiltersEdited(FilterState),
    /// The apply-filters button was clicked
    FiltersApplied,
    /// A sort button was clicked
    SortClicked(SortKey),
    /// A page link was clicked
    PageClicked(usize),
}

/// Work a transition asks the orchestrator to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the full catalog and feed it back as `SnapshotLoaded`
    Reload,
    /// Fetch suggestions and feed them back as `SuggestionsReceived`
    FetchSuggestions(SuggestRequest),
}

/// Working view plus the search, filter, sort and page state around it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    view: Vec<Record>,
    pub search: SearchState,
    pub filter: FilterState,
    pub sort: SortState,
    pub pagination: PaginationState,
}

impl ViewState {
    /// Empty view with the given page size
    pub fn new(page_size: usize) -> Self {
        Self {
            pagination: PaginationState::new(page_size),
            ..Self::default()
        }
    }

    /// The working view, before pagination
    pub fn view(&self) -> &[Record] {
        &self.view
    }

    /// Produces the next state for `trigger`, plus any fetch it requires.
    pub fn apply(mut self, trigger: Trigger) -> (ViewState, Option<Effect>) {
        let effect = match trigger {
            Trigger::SnapshotLoaded { records, initial } => {
                self.view = records.to_vec();
                if initial {
                    self.pagination.goto(1);
                }
                self.pagination.clamp_to(self.view.len());
                None
            }

            Trigger::InputChanged(text) => {
                let request = self.search.input(text);
                if let Some(request) = &request {
                    Logger::trace(
                        Event::SuggestionsRequested,
                        &[
                            ("generation", &request.generation.to_string()),
                            ("query", &request.query),
                        ],
                    );
                }
                request.map(Effect::FetchSuggestions)
            }

            Trigger::SuggestionsReceived(response) => {
                let query = response.query.clone();
                match self.search.accept(response) {
                    SuggestOutcome::Applied => Logger::trace(
                        Event::SuggestionsApplied,
                        &[
                            ("count", &self.search.suggestions.len().to_string()),
                            ("query", &query),
                        ],
                    ),
                    SuggestOutcome::Stale => Logger::info(
                        Event::SuggestionsStale,
                        &[("live", &self.search.query), ("query", &query)],
                    ),
                    // Already logged where the fetch failed
                    SuggestOutcome::Failed => {}
                }
                None
            }

            Trigger::SearchSubmitted => {
                if SearchEngine::is_reload(&self.search.query) {
                    Logger::info(Event::SearchReload, &[]);
                    Some(Effect::Reload)
                } else {
                    self.view = SearchEngine::search(&self.view, &self.search.query);
                    self.pagination.clamp_to(self.view.len());
                    Logger::info(
                        Event::SearchApplied,
                        &[
                            ("query", &self.search.query),
                            ("remaining", &self.view.len().to_string()),
                        ],
                    );
                    None
                }
            }

            Trigger::Reset => Some(Effect::Reload),

            Trigger::FiltersEdited(filter) => {
                self.filter = filter;
                None
            }

            Trigger::FiltersApplied => {
                self.view = FilterEngine::apply(&self.view, &self.filter);
                self.pagination.clamp_to(self.view.len());
                Logger::info(
                    Event::FiltersApplied,
                    &[("remaining", &self.view.len().to_string())],
                );
                None
            }

            Trigger::SortClicked(key) => {
                SortEngine::sort_in_place(&mut self.view, key);
                self.sort.active_key = key;
                Logger::info(Event::SortApplied, &[("key", key.as_str())]);
                None
            }

            Trigger::PageClicked(page) => {
                self.pagination.goto(page);
                Logger::trace(Event::PageSelected, &[("page", &page.to_string())]);
                None
            }
        };

        (self, effect)
    }

    /// The current page as the rendering layer sees it.
    ///
    /// A stale page request is clamped here without touching the state.
    pub fn render(&self) -> PageView {
        let page_size = self.pagination.page_size();
        let total = self.view.len();
        let page = Paginator::clamp(self.pagination.current_page, total, page_size);

        let rows = Paginator::slice(&self.view, page_size, page)
            .iter()
            .enumerate()
            .map(|(index, record)| PageRow {
                ordinal: Paginator::ordinal(page, page_size, index),
                record: record.clone(),
            })
            .collect();

        PageView {
            rows,
            page,
            page_count: Paginator::page_count(total, page_size),
            total,
            links: Paginator::links(total, page_size, page),
            query: self.search.query.clone(),
            suggestions: self.search.suggestions.clone(),
            active_sort: self.sort.active_key,
            filter: self.filter.clone(),
        }
    }
}
