//! Page slicing and page-link generation

use serde::Serialize;

/// Page size and the requested page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    page_size: usize,
    pub current_page: usize,
}

impl PaginationState {
    /// Starts on page 1. A zero page size is raised to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Sets the requested page without validation.
    ///
    /// Stale or out-of-range numbers are accepted; clamping happens when the
    /// view is next rendered or replaced.
    pub fn goto(&mut self, page: usize) {
        self.current_page = page;
    }

    /// Pulls `current_page` back into range for a view of `view_len` records
    pub fn clamp_to(&mut self, view_len: usize) {
        self.current_page = Paginator::clamp(self.current_page, view_len, self.page_size);
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(5)
    }
}

/// One entry of the page-link bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub number: usize,
    pub active: bool,
}

/// Page arithmetic
pub struct Paginator;

impl Paginator {
    /// `view[(page-1)*page_size .. page*page_size]`, truncated to the view.
    ///
    /// Page 0, a zero page size, or a page past the end yield an empty slice.
    pub fn slice<T>(view: &[T], page_size: usize, page: usize) -> &[T] {
        if page == 0 || page_size == 0 {
            return &[];
        }
        let start = match (page - 1).checked_mul(page_size) {
            Some(start) if start < view.len() => start,
            _ => return &[],
        };
        let end = start.saturating_add(page_size).min(view.len());
        &view[start..end]
    }

    /// `ceil(view_len / page_size)`; 0 for an empty view
    pub fn page_count(view_len: usize, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        view_len.div_ceil(page_size)
    }

    /// Nearest valid page for a view of `view_len` records; 1 when empty
    pub fn clamp(page: usize, view_len: usize, page_size: usize) -> usize {
        match Self::page_count(view_len, page_size) {
            0 => 1,
            count => page.clamp(1, count),
        }
    }

    /// One link per page, with the current page marked active
    pub fn links(view_len: usize, page_size: usize, current_page: usize) -> Vec<PageLink> {
        (1..=Self::page_count(view_len, page_size))
            .map(|number| PageLink {
                number,
                active: number == current_page,
            })
            .collect()
    }

    /// 1-based position of the `index`-th row of `page` within the whole view
    pub fn ordinal(page: usize, page_size: usize, index: usize) -> usize {
        page.saturating_sub(1)
            .saturating_mul(page_size)
            .saturating_add(index)
            .saturating_add(1)
    }
}
