// Shared kernel used by every bounded context

pub mod application; // Pagination
pub mod config; // Environment-driven settings
pub mod errors; // Shared error types
pub mod infrastructure; // HTTP clients
pub mod utils; // Logging
pub mod validation; // Declarative form validation

pub use config::{AppConfig, BackendConfig, CatalogConfig};
pub use errors::{AppError, AppResult};
