use crate::modules::catalog::domain::{CatalogRepository, ResultPage};
use crate::shared::errors::AppError;
use crate::shared::utils::logger::TimedOperation;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Shown when a fetch fails; the user retries by searching again
pub const FETCH_ERROR_MESSAGE: &str = "Could not load books right now. Please try again.";
/// Shown when a fetch succeeds with zero items
pub const NO_RESULTS_MESSAGE: &str = "No results found.";

/// Why a page could not be fetched. Never fatal.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum FetchError {
    /// Network unreachable, timeout, or the connection dropped
    #[error("Catalog unreachable: {0}")]
    Transport(String),

    /// The catalog answered with a non-success status
    #[error("Catalog rejected the request: {0}")]
    Rejected(String),

    /// The body was not JSON at all
    #[error("Catalog response unreadable: {0}")]
    Unreadable(String),
}

impl FetchError {
    /// Generic retryable message for display
    pub fn user_message(&self) -> &'static str {
        FETCH_ERROR_MESSAGE
    }
}

impl From<AppError> for FetchError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::ExternalServiceError(msg) => FetchError::Transport(msg),
            AppError::SerializationError(msg) => FetchError::Unreadable(msg),
            other => FetchError::Rejected(other.to_string()),
        }
    }
}

/// Per-fetch state: `Idle -> Loading -> Success | Failed`, back to `Loading`
/// on the next trigger
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Success(ResultPage),
    Failed(FetchError),
}

/// Fetches one page of results for a canonical query
#[derive(Clone)]
pub struct SearchResultLoader {
    repository: Arc<dyn CatalogRepository>,
}

impl SearchResultLoader {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    pub async fn fetch(
        &self,
        query: &str,
        page_size: u32,
        offset: u64,
    ) -> Result<ResultPage, FetchError> {
        let timer = TimedOperation::new("catalog page fetch");

        match self.repository.search_volumes(query, page_size, offset).await {
            Ok(page) => {
                timer.finish_with_info(&format!("{} items", page.items.len()));
                Ok(page)
            }
            Err(e) => {
                timer.finish_with_info("failed");
                log::warn!("Fetching '{}' at offset {} failed: {}", query, offset, e);
                Err(FetchError::from(e))
            }
        }
    }
}
