//! Live search input and suggestion list

use serde::Serialize;

use super::engine::SearchEngine;
use crate::store::StoreError;

/// A suggestion fetch to perform, tagged with the input generation that
/// requested it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestRequest {
    pub generation: u64,
    pub query: String,
}

/// The answer to a [`SuggestRequest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestResponse {
    pub generation: u64,
    pub query: String,
    pub result: Result<Vec<String>, StoreError>,
}

/// What happened to a suggestion response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestOutcome {
    /// The list was replaced
    Applied,
    /// The input moved on since the request; response dropped
    Stale,
    /// The fetch failed; list left unchanged
    Failed,
}

/// Search input state.
///
/// `query` is the live input; `suggestions` is derived from it
/// asynchronously and kept in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchState {
    pub query: String,
    pub suggestions: Vec<String>,
    #[serde(skip)]
    generation: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation of the current input
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Records a keystroke.
    ///
    /// Every change starts a new generation, so responses to earlier input
    /// can be recognized as stale. Returns the fetch to perform, or clears
    /// the list when the input is too short to suggest for.
    pub fn input(&mut self, text: impl Into<String>) -> Option<SuggestRequest> {
        self.query = text.into();
        self.generation += 1;

        if SearchEngine::wants_suggestions(&self.query) {
            Some(SuggestRequest {
                generation: self.generation,
                query: self.query.clone(),
            })
        } else {
            self.suggestions.clear();
            None
        }
    }

    /// What [`SearchState::accept`] would do with `response`
    pub fn classify(&self, response: &SuggestResponse) -> SuggestOutcome {
        if response.generation != self.generation {
            SuggestOutcome::Stale
        } else if response.result.is_err() {
            SuggestOutcome::Failed
        } else {
            SuggestOutcome::Applied
        }
    }

    /// Applies a suggestion response if it still belongs to the live input
    pub fn accept(&mut self, response: SuggestResponse) -> SuggestOutcome {
        let outcome = self.classify(&response);
        if let (SuggestOutcome::Applied, Ok(names)) = (outcome, response.result) {
            self.suggestions = names;
        }
        outcome
    }
}
