//! Slicing the derived rows into pages.

use crate::Record;

/// Page sizes offered by the rows-per-page selector.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// One page of the derived rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a> {
    pub rows: &'a [Record],
    /// Index actually shown, after clamping.
    pub page_index: usize,
    pub page_size: usize,
    /// Number of rows across all pages.
    pub total: usize,
}

impl Page<'_> {
    /// Zero-based offset of the first row on this page.
    pub fn start(&self) -> usize {
        self.page_index * self.page_size
    }

    /// Exclusive end offset, never past `total`.
    pub fn end(&self) -> usize {
        (self.start() + self.page_size).min(self.total)
    }

    pub fn page_count(&self) -> usize {
        page_count(self.total, self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.page_count()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// e.g. `Showing 1 to 5 of 7 results`.
    pub fn range_label(&self) -> String {
        let first = if self.total > 0 { self.start() + 1 } else { 0 };
        format!(
            "Showing {first} to {} of {} results",
            self.end(),
            self.total
        )
    }
}

/// Number of pages needed for `total` rows; zero rows still make one page.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Page `page_index` of `rows`. An index past the end shows the last page.
pub fn paginate(rows: &[Record], page_index: usize, page_size: usize) -> Page<'_> {
    let page_size = page_size.max(1);
    let total = rows.len();
    let page_index = page_index.min(page_count(total, page_size) - 1);
    let start = (page_index * page_size).min(total);
    let end = (start + page_size).min(total);

    Page {
        rows: &rows[start..end],
        page_index,
        page_size,
        total,
    }
}
