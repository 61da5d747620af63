use crate::modules::catalog::domain::entities::BookSummary;
use crate::shared::application::PageCursor;
use serde::{Deserialize, Serialize};

/// One fetched page of catalog results plus the total for the whole query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultPage {
    pub items: Vec<BookSummary>,
    pub total_count: u64,
    pub page_size: u32,
}

impl ResultPage {
    pub fn new(items: Vec<BookSummary>, total_count: u64, page_size: u32) -> Self {
        Self {
            items,
            total_count,
            page_size: page_size.max(1),
        }
    }

    pub fn empty(page_size: u32) -> Self {
        Self::new(Vec::new(), 0, page_size)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_pages(&self) -> u32 {
        PageCursor::total_pages_for(self.total_count, self.page_size)
    }
}
