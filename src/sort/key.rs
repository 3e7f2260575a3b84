//! Sort keys and the active-key marker

use std::fmt;

use serde::{Deserialize, Serialize};

/// The key a view is ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Keep the current order
    #[default]
    None,
    /// Ascending by numeric price
    Price,
    /// Descending by popularity
    Popularity,
    /// Descending by ratings
    Ratings,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::Price => "price",
            SortKey::Popularity => "popularity",
            SortKey::Ratings => "ratings",
        }
    }

    /// Keys offered as sort buttons
    pub fn selectable() -> [SortKey; 2] {
        [SortKey::Price, SortKey::Popularity]
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which sort button was clicked last.
///
/// Only used for highlighting; it never gates a repeat sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub active_key: SortKey,
}

impl SortState {
    pub fn is_active(&self, key: SortKey) -> bool {
        key != SortKey::None && self.active_key == key
    }
}
