use super::search_loader::{FetchError, SearchResultLoader};
use crate::modules::catalog::domain::{BookDetails, CatalogRepository, ResultPage};
use crate::shared::application::PageCursor;
use crate::shared::config::CatalogConfig;
use crate::{log_debug, log_info};
use serde::Serialize;
use std::sync::Arc;

pub const BOOK_NOT_FOUND_MESSAGE: &str = "No book information found.";

/// Result of opening a book's detail page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DetailsOutcome {
    Found(BookDetails),
    NotFound,
    Failed(FetchError),
}

impl DetailsOutcome {
    /// Text to show instead of the details, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            DetailsOutcome::Found(_) => None,
            DetailsOutcome::NotFound => Some(BOOK_NOT_FOUND_MESSAGE),
            DetailsOutcome::Failed(e) => Some(e.user_message()),
        }
    }
}

/// Catalog reads outside the search view: book details and the home shelf
pub struct CatalogService {
    repository: Arc<dyn CatalogRepository>,
    loader: SearchResultLoader,
    home_query: String,
    page_size: u32,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn CatalogRepository>, config: &CatalogConfig) -> Self {
        Self {
            loader: SearchResultLoader::new(repository.clone()),
            repository,
            home_query: config.home_query.clone(),
            page_size: config.page_size,
        }
    }

    pub async fn book_details(&self, id: &str) -> DetailsOutcome {
        let id = id.trim();
        if id.is_empty() {
            return DetailsOutcome::NotFound;
        }

        log_debug!("Catalog: Loading details for '{}'", id);

        match self.repository.get_volume(id).await {
            Ok(Some(details)) => {
                log_info!("Catalog: Loaded details for '{}' ({})", id, details.title);
                DetailsOutcome::Found(details)
            }
            Ok(None) => {
                log_info!("Catalog: No volume '{}'", id);
                DetailsOutcome::NotFound
            }
            Err(e) => {
                log::warn!("Catalog: Details for '{}' failed: {}", id, e);
                DetailsOutcome::Failed(FetchError::from(e))
            }
        }
    }

    /// Featured books on the landing page, using the configured home query
    pub async fn home_page(&self, page: u32) -> Result<ResultPage, FetchError> {
        let cursor = PageCursor::new(self.page_size).with_page(page);
        self.loader
            .fetch(&self.home_query, cursor.limit(), cursor.offset())
            .await
    }
}
