//! Retry policies for the catalog and backend services
//!
//! The catalog only retries when it explicitly rate limits us; everything
//! else is reported to the caller, who decides whether the user retries.

use std::time::Duration;

/// Configuration for HTTP retry behavior
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of retry attempts
    pub max_retries: u32,
    /// Base delay between retries (will be adjusted based on headers)
    pub base_delay: Duration,
    /// Maximum delay to wait (prevents excessive waits)
    pub max_delay: Duration,
    /// Whether to use exponential backoff
    pub exponential_backoff: bool,
    /// Multiplier for exponential backoff
    pub backoff_multiplier: f64,
    /// Add up to 10% random jitter to computed delays
    pub jitter: bool,
    /// Retry 5xx responses
    pub retry_server_errors: bool,
    /// Retry connect/timeout failures
    pub retry_transport_errors: bool,
}

impl RetryPolicy {
    /// Catalog policy: back off on 429 only
    pub fn catalog() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            exponential_backoff: true,
            backoff_multiplier: 2.0,
            jitter: true,
            retry_server_errors: false,
            retry_transport_errors: false,
        }
    }

    /// Backend policy: mutations are never replayed
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            exponential_backoff: false,
            backoff_multiplier: 1.0,
            jitter: false,
            retry_server_errors: false,
            retry_transport_errors: false,
        }
    }

    /// Calculate delay for next retry attempt
    pub fn calculate_delay(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        // Server-provided Retry-After wins
        if let Some(server_delay) = retry_after {
            return server_delay.min(self.max_delay);
        }

        let delay = if self.exponential_backoff {
            let multiplier = self.backoff_multiplier.powi(attempt as i32);
            Duration::from_millis((self.base_delay.as_millis() as f64 * multiplier) as u64)
        } else {
            self.base_delay
        };

        let delay = delay.min(self.max_delay);

        if self.jitter {
            let jitter_ms = (delay.as_millis() as f64 * 0.1 * rand::random::<f64>()) as u64;
            delay + Duration::from_millis(jitter_ms)
        } else {
            delay
        }
    }
}

/// Information extracted from HTTP 429 responses
#[derive(Debug, Clone)]
pub struct RateLimitInfo {
    /// How long to wait before next request (from Retry-After header)
    pub retry_after: Option<Duration>,
    /// Number of requests remaining (from X-RateLimit-Remaining header)
    pub remaining: Option<u32>,
}

impl RateLimitInfo {
    /// Parse rate limit information from HTTP response headers
    pub fn from_headers(headers: &reqwest::header::HeaderMap) -> Self {
        let retry_after = headers
            .get("retry-after")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_secs);

        let remaining = headers
            .get("x-ratelimit-remaining")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.trim().parse::<u32>().ok());

        Self {
            retry_after,
            remaining,
        }
    }
}

/// Determines if a transport error could succeed on a second attempt
pub fn is_retryable_error(error: &reqwest::Error) -> bool {
    if let Some(status) = error.status() {
        matches!(status.as_u16(), 408 | 425 | 429 | 500..=599)
    } else {
        error.is_timeout() || error.is_connect()
    }
}
