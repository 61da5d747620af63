use async_trait::async_trait;

use crate::{
    modules::catalog::domain::{entities::BookDetails, value_objects::ResultPage},
    shared::errors::AppResult,
};

/// Repository interface for the external book catalog
/// This defines the contract for fetching volumes regardless of provider
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Fetch one page of results for a canonical query
    async fn search_volumes(&self, query: &str, limit: u32, offset: u64) -> AppResult<ResultPage>;

    /// Get a single volume; `Ok(None)` when the catalog does not know the id
    async fn get_volume(&self, id: &str) -> AppResult<Option<BookDetails>>;
}
