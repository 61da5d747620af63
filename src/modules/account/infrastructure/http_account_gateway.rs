use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;

use crate::modules::account::domain::{
    AccountGateway, AuthResponse, LoginCredentials, RegisterCredentials,
};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::BackendClient;

/// `/users` endpoints of the backend
pub struct HttpAccountGateway {
    client: Arc<BackendClient>,
}

impl HttpAccountGateway {
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AccountGateway for HttpAccountGateway {
    async fn register(&self, credentials: &RegisterCredentials) -> AppResult<AuthResponse> {
        log::info!("Backend: Registering '{}'", credentials.username);
        self.client
            .send_json(Method::POST, "/users", credentials)
            .await
    }

    async fn login(&self, credentials: &LoginCredentials) -> AppResult<AuthResponse> {
        log::info!("Backend: Logging in '{}'", credentials.email);
        self.client
            .send_json(Method::POST, "/users/login", credentials)
            .await
    }

    async fn logout(&self) -> AppResult<()> {
        log::info!("Backend: Logging out");
        self.client
            .send_unit::<()>(Method::GET, "/users/logout", None)
            .await
    }
}
