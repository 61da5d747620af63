//! Runtime configuration loaded from the environment (and `.env` when present)

use crate::shared::errors::{AppError, AppResult};
use std::env;
use std::time::Duration;

pub const DEFAULT_CATALOG_URL: &str = "https://www.googleapis.com/books/v1/volumes";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_FALLBACK_QUERY: &str = "fiction";
pub const DEFAULT_HOME_QUERY: &str = "subject:mystery";

/// Settings for the external book catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub page_size: u32,
    /// Sent when both the search term and the genre are empty
    pub fallback_query: String,
    /// Query behind the landing page gallery
    pub home_query: String,
    pub request_timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_URL.to_string(),
            api_key: None,
            page_size: DEFAULT_PAGE_SIZE,
            fallback_query: DEFAULT_FALLBACK_QUERY.to_string(),
            home_query: DEFAULT_HOME_QUERY.to_string(),
            request_timeout: Duration::from_secs(15),
        }
    }
}

/// Settings for the users/reviews/likes REST backend
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout: Duration::from_secs(15),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub backend: BackendConfig,
}

impl AppConfig {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get("BOOKSCOUT_CATALOG_URL") {
            config.catalog.base_url = url.trim_end_matches('/').to_string();
        }
        config.catalog.api_key = get("BOOKSCOUT_CATALOG_API_KEY");

        if let Some(size) = get("BOOKSCOUT_PAGE_SIZE") {
            let size: u32 = size.trim().parse()?;
            if size == 0 || size > 40 {
                return Err(AppError::InvalidInput(
                    "BOOKSCOUT_PAGE_SIZE must be between 1 and 40".to_string(),
                ));
            }
            config.catalog.page_size = size;
        }
        if let Some(query) = get("BOOKSCOUT_FALLBACK_QUERY") {
            config.catalog.fallback_query = query.trim().to_string();
        }
        if let Some(query) = get("BOOKSCOUT_HOME_QUERY") {
            config.catalog.home_query = query.trim().to_string();
        }

        if let Some(url) = get("BOOKSCOUT_BACKEND_URL") {
            config.backend.base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(secs) = get("BOOKSCOUT_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse()?;
            let timeout = Duration::from_secs(secs.max(1));
            config.catalog.request_timeout = timeout;
            config.backend.request_timeout = timeout;
        }

        log::debug!(
            "Configuration loaded: catalog={}, backend={}, page_size={}",
            config.catalog.base_url,
            config.backend.base_url,
            config.catalog.page_size
        );

        Ok(config)
    }
}
