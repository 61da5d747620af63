use super::http_client::RateLimitClient;
use crate::shared::config::BackendConfig;
use crate::shared::errors::AppResult;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// JSON client for the users/reviews/likes backend.
///
/// Holds the cookie jar, so every request after login carries the session.
pub struct BackendClient {
    http: RateLimitClient,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> AppResult<Self> {
        Ok(Self::with_client(
            RateLimitClient::for_backend(config.request_timeout)?,
            &config.base_url,
        ))
    }

    /// Create a backend client around a custom HTTP client (for testing)
    pub fn with_client(http: RateLimitClient, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T>(&self, path: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        self.http.get(&self.url(path)).await
    }

    pub async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.http
            .request_json(method, &self.url(path), Some(&body))
            .await
    }

    pub async fn send_unit<B>(&self, method: Method, path: &str, body: Option<&B>) -> AppResult<()>
    where
        B: Serialize + ?Sized,
    {
        let body = body.map(serde_json::to_value).transpose()?;
        self.http
            .request_unit(method, &self.url(path), body.as_ref())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = BackendClient::new(&BackendConfig {
            base_url: "http://localhost:3000/".to_string(),
            ..BackendConfig::default()
        })
        .unwrap();
        assert_eq!(client.url("/users/login"), "http://localhost:3000/users/login");
        assert_eq!(client.url("reviews/abc"), "http://localhost:3000/reviews/abc");
    }
}
