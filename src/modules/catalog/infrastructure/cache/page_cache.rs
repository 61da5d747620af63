use crate::modules::catalog::domain::{BookDetails, CacheStats, CatalogCacheRepository, ResultPage};
use async_trait::async_trait;
use dashmap::DashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Cached entry with TTL support
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: T,
    created_at: Instant,
    ttl: Duration,
}

impl<T> CacheEntry<T> {
    fn new(data: T, ttl: Duration) -> Self {
        Self {
            data,
            created_at: Instant::now(),
            ttl,
        }
    }

    fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PageKey {
    query: String,
    limit: u32,
    offset: u64,
}

impl PageKey {
    /// Lowercased, whitespace-collapsed query so trivially different spellings share an entry
    fn new(query: &str, limit: u32, offset: u64) -> Self {
        let query = query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            query,
            limit,
            offset,
        }
    }
}

/// In-memory TTL cache for catalog pages and volumes
#[derive(Debug)]
pub struct PageCache {
    pages: DashMap<PageKey, CacheEntry<ResultPage>>,
    volumes: DashMap<String, CacheEntry<BookDetails>>,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
    default_ttl: Duration,
    empty_ttl: Duration,
    max_entries: usize,
}

impl PageCache {
    /// `empty_ttl` applies to pages with no items so a typo is not remembered for long
    pub fn new(default_ttl: Duration, empty_ttl: Duration, max_entries: usize) -> Self {
        Self {
            pages: DashMap::new(),
            volumes: DashMap::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
            default_ttl,
            empty_ttl,
            max_entries: max_entries.max(1),
        }
    }

    fn lookup<K, T>(&self, map: &DashMap<K, CacheEntry<T>>, key: &K) -> Option<T>
    where
        K: Eq + Hash + std::fmt::Debug,
        T: Clone,
    {
        if let Some(entry) = map.get(key) {
            if !entry.is_expired() {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Cache hit for key: {:?}", key);
                return Some(entry.data.clone());
            }
        }

        // Expired entries are dropped on read; the guard above must be released first
        if map.remove_if(key, |_, entry| entry.is_expired()).is_some() {
            debug!("Removed expired cache entry for key: {:?}", key);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!("Cache miss for key: {:?}", key);
        None
    }

    fn make_room<K, T>(&self, map: &DashMap<K, CacheEntry<T>>)
    where
        K: Eq + Hash + Clone,
    {
        let current_size = map.len();
        if current_size < self.max_entries {
            return;
        }

        map.retain(|_, entry| !entry.is_expired());

        let current_size = map.len();
        if current_size < self.max_entries {
            return;
        }

        let mut by_age: Vec<(K, Instant)> = map
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().created_at))
            .collect();
        by_age.sort_by_key(|(_, created_at)| *created_at);

        // Back down to 90% of capacity
        let target_size = (self.max_entries * 9) / 10;
        let to_evict = current_size.saturating_sub(target_size).max(1);

        for (key, _) in by_age.into_iter().take(to_evict) {
            map.remove(&key);
        }

        self.evictions.fetch_add(to_evict as u64, Ordering::Relaxed);
        debug!(
            "Evicted {} old cache entries (was {}, now {})",
            to_evict,
            current_size,
            map.len()
        );
    }
}

impl Default for PageCache {
    /// 5 minutes for results, 1 minute for empty pages, 500 entries per map
    fn default() -> Self {
        Self::new(Duration::from_secs(300), Duration::from_secs(60), 500)
    }
}

#[async_trait]
impl CatalogCacheRepository for PageCache {
    async fn get_page(&self, query: &str, limit: u32, offset: u64) -> Option<ResultPage> {
        self.lookup(&self.pages, &PageKey::new(query, limit, offset))
    }

    async fn cache_page(&self, query: &str, limit: u32, offset: u64, page: ResultPage) {
        self.make_room(&self.pages);

        let ttl = if page.is_empty() {
            self.empty_ttl
        } else {
            self.default_ttl
        };
        let key = PageKey::new(query, limit, offset);
        debug!("Cached page for key: {:?} with TTL: {:?}", key, ttl);
        self.pages.insert(key, CacheEntry::new(page, ttl));
    }

    async fn get_volume(&self, id: &str) -> Option<BookDetails> {
        self.lookup(&self.volumes, &id.to_string())
    }

    async fn cache_volume(&self, id: &str, details: BookDetails) {
        self.make_room(&self.volumes);
        self.volumes
            .insert(id.to_string(), CacheEntry::new(details, self.default_ttl));
    }

    async fn clear_cache(&self) {
        self.pages.clear();
        self.volumes.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
        info!("Catalog cache cleared");
    }

    async fn get_cache_stats(&self) -> CacheStats {
        CacheStats {
            page_entries: self.pages.len(),
            volume_entries: self.volumes.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }
}
