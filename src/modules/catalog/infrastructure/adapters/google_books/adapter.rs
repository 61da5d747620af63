use super::mapper::GoogleBooksMapper;
use super::models::{Volume, VolumesResponse};
use crate::modules::catalog::domain::{BookDetails, CatalogRepository, ResultPage};
use crate::shared::config::CatalogConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::http_client::RateLimitClient;
use crate::shared::utils::logger::TimedOperation;
use async_trait::async_trait;

/// Largest `maxResults` the volumes endpoint accepts
pub const MAX_RESULTS_PER_REQUEST: u32 = 40;

/// Google Books volumes API adapter
pub struct GoogleBooksAdapter {
    http_client: RateLimitClient,
    base_url: String,
    api_key: Option<String>,
    mapper: GoogleBooksMapper,
}

impl GoogleBooksAdapter {
    pub fn new(config: &CatalogConfig) -> AppResult<Self> {
        let http_client = RateLimitClient::for_catalog(config.request_timeout)?;
        Ok(Self::with_client(http_client, config))
    }

    /// Create adapter with custom HTTP client (for testing)
    pub fn with_client(http_client: RateLimitClient, config: &CatalogConfig) -> Self {
        Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            mapper: GoogleBooksMapper::new(),
        }
    }

    pub fn can_make_request_now(&self) -> bool {
        self.http_client.can_make_request_now()
    }

    /// `{base}?q=...&maxResults=...&startIndex=...[&key=...]`
    pub fn build_search_url(&self, query: &str, limit: u32, offset: u64) -> String {
        let limit = limit.clamp(1, MAX_RESULTS_PER_REQUEST);
        let url = format!(
            "{}?q={}&maxResults={}&startIndex={}",
            self.base_url,
            urlencoding::encode(query),
            limit,
            offset
        );
        match &self.api_key {
            Some(key) => format!("{}&key={}", url, urlencoding::encode(key)),
            None => url,
        }
    }

    pub fn build_volume_url(&self, id: &str) -> String {
        let url = format!("{}/{}", self.base_url, urlencoding::encode(id));
        match &self.api_key {
            Some(key) => format!("{}?key={}", url, urlencoding::encode(key)),
            None => url,
        }
    }
}

#[async_trait]
impl CatalogRepository for GoogleBooksAdapter {
    async fn search_volumes(&self, query: &str, limit: u32, offset: u64) -> AppResult<ResultPage> {
        let url = self.build_search_url(query, limit, offset);
        let timer = TimedOperation::new("Google Books search");

        log::info!(
            "Google Books: Searching '{}' (limit: {}, offset: {})",
            query,
            limit,
            offset
        );

        let response: VolumesResponse = self.http_client.get(&url).await?;
        let page = self.mapper.map_volumes(response, limit);

        timer.finish_with_info(&format!("{} of {} results", page.items.len(), page.total_count));
        Ok(page)
    }

    async fn get_volume(&self, id: &str) -> AppResult<Option<BookDetails>> {
        let url = self.build_volume_url(id);

        log::info!("Google Books: Getting volume '{}'", id);

        let volume: Volume = match self.http_client.get(&url).await {
            Ok(volume) => volume,
            Err(AppError::NotFound(_)) => {
                log::info!("Google Books: No volume found for '{}'", id);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        Ok(self.mapper.map_details(volume))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::infrastructure::http_client::RetryPolicy;

    fn adapter(api_key: Option<&str>) -> GoogleBooksAdapter {
        let config = CatalogConfig {
            api_key: api_key.map(str::to_string),
            ..CatalogConfig::default()
        };
        let client = RateLimitClient::new(
            "google_books",
            reqwest::Client::new(),
            RetryPolicy::none(),
            RateLimitClient::create_rate_limiter(10.0, 10),
        );
        GoogleBooksAdapter::with_client(client, &config)
    }

    #[test]
    fn test_search_url_encodes_query() {
        let url = adapter(None).build_search_url("harry potter subject:fantasy", 20, 40);
        assert_eq!(
            url,
            "https://www.googleapis.com/books/v1/volumes?q=harry%20potter%20subject%3Afantasy&maxResults=20&startIndex=40"
        );
    }

    #[test]
    fn test_search_url_caps_page_size() {
        let url = adapter(None).build_search_url("x", 100, 0);
        assert!(url.contains("maxResults=40"));
    }

    #[test]
    fn test_api_key_is_appended() {
        let adapter = adapter(Some("secret"));
        assert!(adapter.build_search_url("x", 20, 0).ends_with("&key=secret"));
        assert_eq!(
            adapter.build_volume_url("abc"),
            "https://www.googleapis.com/books/v1/volumes/abc?key=secret"
        );
    }

    #[test]
    fn test_volume_url_without_key() {
        assert_eq!(
            adapter(None).build_volume_url("zyTCAlFPjgYC"),
            "https://www.googleapis.com/books/v1/volumes/zyTCAlFPjgYC"
        );
    }
}
