/// Pagination support for remote result sets
///
/// Pages are 1-based. The cursor only knows the total result count after a
/// fetch has reported it; until then `next` is unavailable.
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Number of page-number buttons shown around the current page
pub const PAGE_WINDOW_SIZE: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageDirection {
    Next,
    Prev,
}

/// Result of trying to move the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advance {
    Moved(u32),
    AtStart,
    AtEnd,
}

/// Current page plus the total reported by the last fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    page: u32,
    page_size: u32,
    total_count: u64,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
            total_count: 0,
        }
    }
}

impl PageCursor {
    /// A zero page size is treated as 1
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    /// Start on a given page; values below 1 become 1
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// `max(1, ceil(total_count / page_size))`
    pub fn total_pages_for(total_count: u64, page_size: u32) -> u32 {
        let page_size = u64::from(page_size.max(1));
        let pages = total_count.div_ceil(page_size);
        u32::try_from(pages).unwrap_or(u32::MAX).max(1)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn total_pages(&self) -> u32 {
        Self::total_pages_for(self.total_count, self.page_size)
    }

    /// Offset of the first item on the current page
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    pub fn limit(&self) -> u32 {
        self.page_size
    }

    pub fn can_next(&self) -> bool {
        u64::from(self.page) * u64::from(self.page_size) < self.total_count
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    /// Move one page; a blocked move leaves the page unchanged
    pub fn advance(&mut self, direction: PageDirection) -> Advance {
        match direction {
            PageDirection::Next if self.can_next() => {
                self.page += 1;
                Advance::Moved(self.page)
            }
            PageDirection::Next => Advance::AtEnd,
            PageDirection::Prev if self.can_prev() => {
                self.page -= 1;
                Advance::Moved(self.page)
            }
            PageDirection::Prev => Advance::AtStart,
        }
    }

    /// Jump to a page within `1..=total_pages`; returns false and stays put otherwise
    pub fn jump_to(&mut self, page: u32) -> bool {
        if page == 0 || page > self.total_pages() {
            return false;
        }
        self.page = page;
        true
    }

    /// A new query invalidates the previous pagination context
    pub fn reset(&mut self) {
        self.page = 1;
        self.total_count = 0;
    }

    /// Record the total reported by a fetch
    pub fn set_total(&mut self, total_count: u64) {
        self.total_count = total_count;
    }

    /// Page numbers to render as buttons, centered on the current page and
    /// clamped to `1..=total_pages`
    pub fn page_window(&self, window_size: u32) -> RangeInclusive<u32> {
        let window_size = window_size.max(1);
        let total_pages = self.total_pages();
        let half = window_size / 2;

        let upper = total_pages.saturating_sub(window_size).saturating_add(1);
        let start = self.page.saturating_sub(half).min(upper).max(1);
        let end = start.saturating_add(window_size - 1).min(total_pages);

        start..=end
    }
}
