pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{BookDetails, BookSummary};
pub use repositories::{CacheStats, CatalogCacheRepository, CatalogRepository};
pub use value_objects::{QueryComposer, ResultPage, SearchState};
