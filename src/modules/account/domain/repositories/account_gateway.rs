use async_trait::async_trait;

use crate::modules::account::domain::entities::{
    AuthResponse, LoginCredentials, RegisterCredentials,
};
use crate::shared::errors::AppResult;

/// Session endpoints of the backend. The session itself lives in the HTTP
/// client's cookie jar.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountGateway: Send + Sync {
    async fn register(&self, credentials: &RegisterCredentials) -> AppResult<AuthResponse>;

    async fn login(&self, credentials: &LoginCredentials) -> AppResult<AuthResponse>;

    async fn logout(&self) -> AppResult<()>;
}
