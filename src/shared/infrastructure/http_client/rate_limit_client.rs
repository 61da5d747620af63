//! HTTP client with client-side rate limiting and policy-driven retries
//!
//! One instance per remote service. Non-success statuses are mapped to
//! `AppError` variants so callers can match on `NotFound`/`Unauthorized`.

use super::retry_policy::{is_retryable_error, RateLimitInfo, RetryPolicy};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use reqwest::{Client, Method, Response};
use serde_json::Value;
use std::num::NonZeroU32;
use std::time::{Duration, Instant};
use tokio::time::sleep;

pub type DirectRateLimiter = GovernorRateLimiter<
    governor::state::direct::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
    governor::middleware::NoOpMiddleware,
>;

const USER_AGENT: &str = "bookscout/0.1";

pub struct RateLimitClient {
    client: Client,
    rate_limiter: DirectRateLimiter,
    retry_policy: RetryPolicy,
    service_name: String,
}

impl RateLimitClient {
    /// Client for the public book catalog
    pub fn for_catalog(timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::new(
            "Catalog",
            client,
            RetryPolicy::catalog(),
            // Google Books tolerates short bursts; stay well below its per-user quota
            Self::create_rate_limiter(2.0, 4),
        ))
    }

    /// Client for the users/reviews/likes backend; keeps the session cookie
    pub fn for_backend(timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .cookie_store(true)
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::new(
            "Backend",
            client,
            RetryPolicy::none(),
            Self::create_rate_limiter(20.0, 10),
        ))
    }

    /// Create a rate limiter with specified requests per second and burst capacity
    pub fn create_rate_limiter(requests_per_second: f64, burst_size: u32) -> DirectRateLimiter {
        let period = if requests_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / requests_per_second)
        } else {
            Duration::from_secs(3600)
        };

        let burst = NonZeroU32::new(burst_size.max(1)).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst);

        GovernorRateLimiter::direct(quota)
    }

    pub fn new(
        service_name: &str,
        client: Client,
        retry_policy: RetryPolicy,
        rate_limiter: DirectRateLimiter,
    ) -> Self {
        Self {
            client,
            rate_limiter,
            retry_policy,
            service_name: service_name.to_string(),
        }
    }

    /// GET and decode a JSON body
    pub async fn get<T>(&self, url: &str) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.request_json(Method::GET, url, None).await
    }

    /// Send a request and decode the JSON response
    pub async fn request_json<T>(&self, method: Method, url: &str, body: Option<&Value>) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.request_with_retries(method, url, body).await?;
        self.parse_response(response).await
    }

    /// Send a request whose response body is irrelevant
    pub async fn request_unit(&self, method: Method, url: &str, body: Option<&Value>) -> AppResult<()> {
        self.request_with_retries(method, url, body).await.map(|_| ())
    }

    async fn request_with_retries(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> AppResult<Response> {
        let endpoint = Self::loggable_endpoint(url);
        let attempts = self.retry_policy.max_retries + 1;

        for attempt in 0..attempts {
            let has_attempts_left = attempt + 1 < attempts;

            self.rate_limiter.until_ready().await;
            LogContext::request_sent(&self.service_name, method.as_str(), endpoint);
            let started = Instant::now();

            let response = match self.build_and_send_request(&method, url, body).await {
                Ok(response) => response,
                Err(e) => {
                    if self.retry_policy.retry_transport_errors
                        && is_retryable_error(&e)
                        && has_attempts_left
                    {
                        let delay = self.retry_policy.calculate_delay(attempt, None);
                        log::warn!(
                            "{} request failed (attempt {}/{}): {}. Retrying in {:?}",
                            self.service_name,
                            attempt + 1,
                            attempts,
                            e,
                            delay
                        );
                        sleep(delay).await;
                        continue;
                    }
                    log::warn!("{} request to {} failed: {}", self.service_name, endpoint, e);
                    return Err(AppError::ExternalServiceError(format!(
                        "{} request failed: {}",
                        self.service_name, e
                    )));
                }
            };

            let status = response.status();
            LogContext::response_received(
                &self.service_name,
                endpoint,
                status.as_u16(),
                started.elapsed().as_millis() as u64,
            );

            if status.is_success() {
                return Ok(response);
            }

            if status.as_u16() == 429 && has_attempts_left {
                let info = RateLimitInfo::from_headers(response.headers());
                let delay = self.retry_policy.calculate_delay(attempt, info.retry_after);
                log::warn!(
                    "{} rate limited (attempt {}/{}, remaining quota: {:?}). Waiting {:?} before retry.",
                    self.service_name,
                    attempt + 1,
                    attempts,
                    info.remaining,
                    delay
                );
                sleep(delay).await;
                continue;
            }

            if status.is_server_error() && self.retry_policy.retry_server_errors && has_attempts_left
            {
                let delay = self.retry_policy.calculate_delay(attempt, None);
                log::warn!(
                    "{} returned {} (attempt {}/{}). Retrying in {:?}",
                    self.service_name,
                    status,
                    attempt + 1,
                    attempts,
                    delay
                );
                sleep(delay).await;
                continue;
            }

            return Err(AppError::from_status(&self.service_name, status));
        }

        Err(AppError::ExternalServiceError(format!(
            "{} request failed after {} attempts",
            self.service_name, attempts
        )))
    }

    async fn build_and_send_request(
        &self,
        method: &Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Response, reqwest::Error> {
        let mut request_builder = self
            .client
            .request(method.clone(), url)
            .header("Accept", "application/json");

        if let Some(json_body) = body {
            request_builder = request_builder.json(json_body);
        }

        request_builder.send().await
    }

    async fn parse_response<T>(&self, response: Response) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::ExternalServiceError(format!(
                "Failed to read {} response: {}",
                self.service_name, e
            ))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.service_name,
                e,
                Self::preview(&response_text)
            ))
        })
    }

    fn preview(text: &str) -> String {
        match text.char_indices().nth(200) {
            Some((idx, _)) => format!("{}...", &text[..idx]),
            None => text.to_string(),
        }
    }

    /// Strip the query string so keys and search terms stay out of the logs
    fn loggable_endpoint(url: &str) -> &str {
        url.split('?').next().unwrap_or(url)
    }

    /// Check if a request can be made now (for testing/debugging)
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter.check().is_ok()
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }
}
