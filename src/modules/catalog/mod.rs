pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{CatalogService, SearchSession, SearchView};
pub use infrastructure::{CachingCatalogDecorator, GoogleBooksAdapter, PageCache};
