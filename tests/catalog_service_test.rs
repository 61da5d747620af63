//! Book details, the home shelf and the page cache wired together the way
//! the application builds them

mod utils;

use bookscout_lib::modules::catalog::application::{
    DetailsOutcome, LoadOutcome, MemoryLocation, SearchResultLoader, SearchSession, SearchStatus,
    UrlStateBinding, BOOK_NOT_FOUND_MESSAGE, FETCH_ERROR_MESSAGE,
};
use bookscout_lib::modules::catalog::domain::{
    CatalogCacheRepository, CatalogRepository, QueryComposer,
};
use bookscout_lib::modules::catalog::{CachingCatalogDecorator, CatalogService, PageCache};
use bookscout_lib::shared::config::CatalogConfig;
use std::sync::Arc;
use std::time::Duration;
use utils::{numbered_books, BookFactory, InMemoryCatalog};

fn cached(
    catalog: Arc<InMemoryCatalog>,
) -> (Arc<dyn CatalogRepository>, Arc<PageCache>) {
    let cache = Arc::new(PageCache::new(
        Duration::from_secs(300),
        Duration::from_secs(60),
        100,
    ));
    let repository: Arc<dyn CatalogRepository> =
        Arc::new(CachingCatalogDecorator::new(catalog, cache.clone()));
    (repository, cache)
}

#[tokio::test]
async fn test_details_found() {
    // Arrange
    let hobbit = BookFactory::complete().with_id("hobbit").build_details();
    let catalog = Arc::new(InMemoryCatalog::new().with_volume(hobbit.clone()));
    let service = CatalogService::new(catalog, &CatalogConfig::default());

    // Act
    let outcome = service.book_details("hobbit").await;

    // Assert
    assert_eq!(outcome, DetailsOutcome::Found(hobbit));
    assert_eq!(outcome.message(), None);
}

#[tokio::test]
async fn test_unknown_book_shows_not_found_message() {
    let service = CatalogService::new(
        Arc::new(InMemoryCatalog::new()),
        &CatalogConfig::default(),
    );

    let outcome = service.book_details("missing").await;

    assert_eq!(outcome, DetailsOutcome::NotFound);
    assert_eq!(outcome.message(), Some(BOOK_NOT_FOUND_MESSAGE));
}

#[tokio::test]
async fn test_details_failure_is_retryable() {
    let catalog = Arc::new(InMemoryCatalog::new());
    catalog.set_offline(true);
    let service = CatalogService::new(catalog, &CatalogConfig::default());

    let outcome = service.book_details("hobbit").await;

    assert!(matches!(outcome, DetailsOutcome::Failed(_)));
    assert_eq!(outcome.message(), Some(FETCH_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_home_shelf_uses_home_query() {
    let config = CatalogConfig::default();
    let catalog = Arc::new(
        InMemoryCatalog::new().with_results(&config.home_query, numbered_books("m", 0, 30)),
    );
    let service = CatalogService::new(catalog.clone(), &config);

    let second = service.home_page(2).await.unwrap();

    assert_eq!(second.items.len(), 10);
    assert_eq!(second.items[0].id, "m-20");
    assert_eq!(
        catalog.calls(),
        vec![(config.home_query.clone(), config.page_size, 20)]
    );
}

#[tokio::test]
async fn test_revisiting_a_page_is_served_from_cache() {
    // Arrange
    let catalog = Arc::new(InMemoryCatalog::new().with_results("dune", numbered_books("d", 0, 45)));
    let (repository, cache) = cached(catalog.clone());
    let location = Arc::new(MemoryLocation::new("query=dune"));
    let session = SearchSession::mount(
        SearchResultLoader::new(repository),
        QueryComposer::new("fiction"),
        UrlStateBinding::new(location),
        20,
    );

    // Act
    session.load().await;
    session.next_page().await;
    let back = session.prev_page().await;

    // Assert
    assert_eq!(back, LoadOutcome::Applied(SearchStatus::Loaded));
    assert_eq!(session.view().await.items[0].id, "d-0");
    assert_eq!(catalog.call_count(), 2);

    let stats = cache.get_cache_stats().await;
    assert_eq!(stats.page_entries, 2);
    assert_eq!(stats.hits, 1);
}

#[tokio::test]
async fn test_failures_are_not_cached() {
    let catalog = Arc::new(InMemoryCatalog::new().with_results("dune", numbered_books("d", 0, 5)));
    let (repository, cache) = cached(catalog.clone());

    catalog.set_offline(true);
    assert!(repository.search_volumes("dune", 20, 0).await.is_err());

    catalog.set_offline(false);
    let page = repository.search_volumes("dune", 20, 0).await.unwrap();

    assert_eq!(page.items.len(), 5);
    assert_eq!(catalog.call_count(), 2);
    assert_eq!(cache.get_cache_stats().await.page_entries, 1);
}

#[tokio::test]
async fn test_cached_details_skip_the_catalog() {
    let hobbit = BookFactory::complete().with_id("hobbit").build_details();
    let catalog = Arc::new(InMemoryCatalog::new().with_volume(hobbit.clone()));
    let (repository, _) = cached(catalog.clone());
    let service = CatalogService::new(repository, &CatalogConfig::default());

    service.book_details("hobbit").await;
    catalog.set_offline(true);
    let outcome = service.book_details("hobbit").await;

    assert_eq!(outcome, DetailsOutcome::Found(hobbit));
}

#[tokio::test]
async fn test_concurrent_readers_share_cached_pages() {
    let catalog = Arc::new(InMemoryCatalog::new().with_results("dune", numbered_books("d", 0, 45)));
    let (repository, cache) = cached(catalog.clone());
    repository.search_volumes("dune", 20, 0).await.unwrap();

    let reads = (0..8).map(|_| repository.search_volumes("Dune ", 20, 0));
    let pages = futures::future::join_all(reads).await;

    assert!(pages.iter().all(|p| p.as_ref().map(|p| p.items.len()) == Ok(20)));
    assert_eq!(catalog.call_count(), 1);
    assert_eq!(cache.get_cache_stats().await.hits, 8);
}
