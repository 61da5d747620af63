use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::{BookDetails, ResultPage};

/// Cache for catalog responses, keyed the way the catalog is queried
#[async_trait]
pub trait CatalogCacheRepository: Send + Sync {
    async fn get_page(&self, query: &str, limit: u32, offset: u64) -> Option<ResultPage>;

    async fn cache_page(&self, query: &str, limit: u32, offset: u64, page: ResultPage);

    async fn get_volume(&self, id: &str) -> Option<BookDetails>;

    async fn cache_volume(&self, id: &str, details: BookDetails);

    async fn clear_cache(&self);

    async fn get_cache_stats(&self) -> CacheStats;
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub page_entries: usize,
    pub volume_entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}
