/// Shared infrastructure concerns
///
/// HTTP plumbing used by every bounded context that talks to a remote service.
pub mod backend_client;
pub mod http_client;

pub use backend_client::BackendClient;
pub use http_client::{RateLimitClient, RetryPolicy};
