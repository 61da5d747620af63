mod cache_repo;
mod catalog_repo;

pub use cache_repo::*;
pub use catalog_repo::CatalogRepository;
