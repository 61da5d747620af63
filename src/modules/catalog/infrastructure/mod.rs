pub mod adapters;
pub mod cache;
pub mod decorators;

pub use adapters::GoogleBooksAdapter;
pub use cache::PageCache;
pub use decorators::CachingCatalogDecorator;
