use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Current page index and rows per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationModel {
    pub page: usize,
    pub page_size: usize,
}

impl PaginationModel {
    /// First page with the given size.
    pub const fn new(page_size: usize) -> Self {
        Self { page: 0, page_size }
    }

    pub const fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Number of pages needed for `total_rows`. Zero rows still count as one page.
    pub fn page_count(&self, total_rows: usize) -> usize {
        if self.page_size == 0 {
            return 1;
        }
        total_rows.div_ceil(self.page_size).max(1)
    }

    /// Indices of the rows shown on the current page.
    ///
    /// Empty when the page lies past the end or the page size is zero.
    pub fn row_range(&self, total_rows: usize) -> Range<usize> {
        let start = self.page.saturating_mul(self.page_size).min(total_rows);
        let end = start.saturating_add(self.page_size).min(total_rows);
        start..end
    }
}

impl Default for PaginationModel {
    fn default() -> Self {
        Self::new(crate::props::DEFAULT_PAGE_SIZE)
    }
}
