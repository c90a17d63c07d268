use serde::{Deserialize, Serialize};

/// Position of one page of supplier columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// 1-based, clamped to `1..=total_pages`
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    /// 1-based index of the first entry on the page, 0 when empty
    pub start: usize,
    /// 1-based index of the last entry on the page, 0 when empty
    pub end: usize,
    pub total: usize,
}

impl PageInfo {
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total.div_ceil(per_page).max(1);
        let page = page.clamp(1, total_pages);
        let (start, end) = if total == 0 {
            (0, 0)
        } else {
            ((page - 1) * per_page + 1, (page * per_page).min(total))
        };
        Self {
            page,
            per_page,
            total_pages,
            start,
            end,
            total,
        }
    }

    /// The entries of `entries` that fall on this page.
    pub fn slice<'a, T>(&self, entries: &'a [T]) -> &'a [T] {
        if self.start == 0 || self.start > entries.len() {
            return &[];
        }
        &entries[self.start - 1..self.end.min(entries.len())]
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}
