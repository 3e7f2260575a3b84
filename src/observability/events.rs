//! Observable events of the catalog browser
//!
//! Events are explicit and typed; every log line names one.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration read and validated
    ConfigLoaded,

    // Catalog loads
    /// Full catalog fetch started
    CatalogLoadBegin,
    /// Full catalog fetch replaced the snapshot
    CatalogLoadComplete,
    /// Full catalog fetch failed; previous snapshot kept
    CatalogLoadFailed,

    // Suggestions
    /// Suggestion fetch issued for a query prefix
    SuggestionsRequested,
    /// Suggestion list replaced
    SuggestionsApplied,
    /// Suggestion response arrived for an outdated input and was dropped
    SuggestionsStale,
    /// Suggestion fetch failed; list left unchanged
    SuggestionsFailed,

    // Pipeline stages
    /// Working view narrowed by a name prefix
    SearchApplied,
    /// Empty search submitted; reload requested
    SearchReload,
    /// Working view narrowed by the filter set
    FiltersApplied,
    /// A record's price could not be parsed and was skipped
    PriceUnparseable,
    /// Working view reordered
    SortApplied,
    /// Active page changed
    PageSelected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",

            Event::CatalogLoadBegin => "CATALOG_LOAD_BEGIN",
            Event::CatalogLoadComplete => "CATALOG_LOAD_COMPLETE",
            Event::CatalogLoadFailed => "CATALOG_LOAD_FAILED",

            Event::SuggestionsRequested => "SUGGESTIONS_REQUESTED",
            Event::SuggestionsApplied => "SUGGESTIONS_APPLIED",
            Event::SuggestionsStale => "SUGGESTIONS_STALE",
            Event::SuggestionsFailed => "SUGGESTIONS_FAILED",

            Event::SearchApplied => "SEARCH_APPLIED",
            Event::SearchReload => "SEARCH_RELOAD",
            Event::FiltersApplied => "FILTERS_APPLIED",
            Event::PriceUnparseable => "PRICE_UNPARSEABLE",
            Event::SortApplied => "SORT_APPLIED",
            Event::PageSelected => "PAGE_SELECTED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
