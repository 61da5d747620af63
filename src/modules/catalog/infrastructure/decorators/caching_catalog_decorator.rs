use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::catalog::domain::{
    BookDetails, CatalogCacheRepository, CatalogRepository, ResultPage,
};
use crate::shared::errors::AppResult;

/// Decorator that adds transparent caching to any [`CatalogRepository`].
///
/// Only successful responses are cached; errors always reach the caller so a
/// retry goes back to the network.
pub struct CachingCatalogDecorator {
    inner: Arc<dyn CatalogRepository>,
    cache: Arc<dyn CatalogCacheRepository>,
}

impl CachingCatalogDecorator {
    pub fn new(inner: Arc<dyn CatalogRepository>, cache: Arc<dyn CatalogCacheRepository>) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl CatalogRepository for CachingCatalogDecorator {
    async fn search_volumes(&self, query: &str, limit: u32, offset: u64) -> AppResult<ResultPage> {
        if let Some(cached) = self.cache.get_page(query, limit, offset).await {
            log::debug!("Cache HIT for search: '{}' @{}", query, offset);
            return Ok(cached);
        }

        log::debug!("Cache MISS for search: '{}' @{}", query, offset);

        let page = self.inner.search_volumes(query, limit, offset).await?;

        self.cache
            .cache_page(query, limit, offset, page.clone())
            .await;

        Ok(page)
    }

    async fn get_volume(&self, id: &str) -> AppResult<Option<BookDetails>> {
        if let Some(cached) = self.cache.get_volume(id).await {
            log::debug!("Cache HIT for volume: {}", id);
            return Ok(Some(cached));
        }

        log::debug!("Cache MISS for volume: {}", id);

        let result = self.inner.get_volume(id).await?;

        // Not-found is not cached
        if let Some(ref details) = result {
            self.cache.cache_volume(id, details.clone()).await;
        }

        Ok(result)
    }
}
