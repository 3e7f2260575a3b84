//! Prefix search and suggestion fetching

use super::state::{SuggestRequest, SuggestResponse};
use crate::record::Record;
use crate::store::{self, CatalogSource};

/// Search over records by name
pub struct SearchEngine;

impl SearchEngine {
    /// Inputs must be longer than this many characters to fetch suggestions
    pub const SUGGEST_MIN_EXCLUSIVE: usize = 1;

    /// True when `prefix` is long enough to fetch suggestions for
    pub fn wants_suggestions(prefix: &str) -> bool {
        prefix.chars().count() > Self::SUGGEST_MIN_EXCLUSIVE
    }

    /// True when submitting `query` means "reload everything" rather than
    /// "narrow the view"
    pub fn is_reload(query: &str) -> bool {
        query.trim().is_empty()
    }

    /// Case-insensitive prefix test against the record name.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(record: &Record, needle: &str) -> bool {
        record.name.to_lowercase().starts_with(needle)
    }

    /// Narrows `view` to records whose name starts with `query`, ignoring
    /// case and preserving relative order.
    ///
    /// The query is used as typed; surrounding whitespace only matters to
    /// [`SearchEngine::is_reload`].
    pub fn search(view: &[Record], query: &str) -> Vec<Record> {
        let needle = query.to_lowercase();
        view.iter()
            .filter(|record| Self::matches(record, &needle))
            .cloned()
            .collect()
    }

    /// Fetches suggestion candidates for `request` and maps them to names,
    /// in source order.
    pub async fn suggest(source: &dyn CatalogSource, request: SuggestRequest) -> SuggestResponse {
        let result = store::load_matching(source, &request.query)
            .await
            .map(|records| records.into_iter().map(|r| r.name).collect());

        SuggestResponse {
            generation: request.generation,
            query: request.query,
            result,
        }
    }
}
