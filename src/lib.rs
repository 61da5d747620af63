pub mod modules;
pub mod shared;

use modules::{
    account::{AccountGateway, AuthContext, HttpAccountGateway},
    catalog::{
        application::{MemoryLocation, SearchResultLoader, UrlStateBinding},
        domain::{CatalogCacheRepository, CatalogRepository, QueryComposer},
        CachingCatalogDecorator, CatalogService, GoogleBooksAdapter, PageCache, SearchSession,
    },
    likes::{HttpLikeRepository, LikeRepository, LikeService},
    reviews::{HttpReviewRepository, ReviewRepository, ReviewService},
};
use shared::infrastructure::BackendClient;
use shared::{AppConfig, AppResult};
use std::sync::Arc;

pub use shared::errors::AppError;

/// Every service of the application, wired against the real catalog and backend
pub struct AppServices {
    pub config: AppConfig,
    pub catalog: Arc<dyn CatalogRepository>,
    pub catalog_service: Arc<CatalogService>,
    pub auth: Arc<AuthContext>,
    pub reviews: Arc<ReviewService>,
    pub likes: Arc<LikeService>,
}

impl AppServices {
    pub fn build(config: AppConfig) -> AppResult<Self> {
        let adapter: Arc<dyn CatalogRepository> = Arc::new(GoogleBooksAdapter::new(&config.catalog)?);

        // Wrap the adapter with the caching decorator so repeated pages skip the network
        let cache: Arc<dyn CatalogCacheRepository> = Arc::new(PageCache::default());
        let catalog: Arc<dyn CatalogRepository> =
            Arc::new(CachingCatalogDecorator::new(adapter, cache));

        let catalog_service = Arc::new(CatalogService::new(catalog.clone(), &config.catalog));

        // One backend client so the session cookie is shared by all backend calls
        let backend = Arc::new(BackendClient::new(&config.backend)?);

        let gateway: Arc<dyn AccountGateway> = Arc::new(HttpAccountGateway::new(backend.clone()));
        let auth = Arc::new(AuthContext::new(gateway));

        let review_repo: Arc<dyn ReviewRepository> =
            Arc::new(HttpReviewRepository::new(backend.clone()));
        let reviews = Arc::new(ReviewService::new(review_repo, auth.clone()));

        let like_repo: Arc<dyn LikeRepository> = Arc::new(HttpLikeRepository::new(backend));
        let likes = Arc::new(LikeService::new(like_repo, auth.clone()));

        log::info!("Services initialized (catalog: {})", config.catalog.base_url);

        Ok(Self {
            config,
            catalog,
            catalog_service,
            auth,
            reviews,
            likes,
        })
    }

    /// End the session and forget the signed-in user's liked books
    pub async fn logout(&self) -> AppResult<()> {
        self.auth.logout().await?;
        self.likes.clear().await;
        Ok(())
    }

    /// A search view bound to an in-memory address bar seeded with `initial_query`
    pub fn search_session(&self, initial_query: &str) -> (SearchSession, Arc<MemoryLocation>) {
        let location = Arc::new(MemoryLocation::new(initial_query));
        let session = SearchSession::mount(
            SearchResultLoader::new(self.catalog.clone()),
            QueryComposer::new(&self.config.catalog.fallback_query),
            UrlStateBinding::new(location.clone()),
            self.config.catalog.page_size,
        );
        (session, location)
    }
}
