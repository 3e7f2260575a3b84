//! Render output handed to the rendering layer

use serde::Serialize;

use crate::filter::FilterState;
use crate::paginate::PageLink;
use crate::record::Record;
use crate::sort::SortKey;

/// One table row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRow {
    /// 1-based position within the whole working view
    pub ordinal: usize,
    pub record: Record,
}

/// Everything needed to draw the current page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub rows: Vec<PageRow>,
    /// Page actually shown (the requested page, clamped)
    pub page: usize,
    pub page_count: usize,
    /// Length of the working view
    pub total: usize,
    pub links: Vec<PageLink>,
    pub query: String,
    pub suggestions: Vec<String>,
    pub active_sort: SortKey,
    pub filter: FilterState,
}

impl PageView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Names on this page, in display order
    pub fn names(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.record.name.as_str()).collect()
    }
}
