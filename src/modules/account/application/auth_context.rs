use super::forms::{
    LoginForm, RegisterForm, LOGIN_FAILED_MESSAGE, REGISTERED_MESSAGE, REGISTER_FAILED_MESSAGE,
};
use crate::modules::account::domain::{AccountGateway, AuthResponse, User};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::validation::FormOutcome;
use crate::{log_info, log_warn};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Who is signed in. Passed explicitly to every service that needs a user.
pub struct AuthContext {
    gateway: Arc<dyn AccountGateway>,
    user: RwLock<Option<User>>,
}

impl AuthContext {
    pub fn new(gateway: Arc<dyn AccountGateway>) -> Self {
        Self {
            gateway,
            user: RwLock::new(None),
        }
    }

    pub async fn register(&self, form: &RegisterForm) -> AppResult<User> {
        let response = self.gateway.register(&form.credentials()).await?;
        let user = self.accept("Registration", response).await?;
        log_info!("Auth: Registered '{}'", user.username);
        Ok(user)
    }

    pub async fn login(&self, form: &LoginForm) -> AppResult<User> {
        let response = self.gateway.login(&form.credentials()).await?;
        let user = self.accept("Login", response).await?;
        log_info!("Auth: Logged in as '{}'", user.username);
        Ok(user)
    }

    /// Ends the session. The local user is only cleared when the backend
    /// confirms; a failed call is logged and returned.
    pub async fn logout(&self) -> AppResult<()> {
        match self.gateway.logout().await {
            Ok(()) => {
                *self.user.write().await = None;
                log_info!("Auth: Logged out");
                Ok(())
            }
            Err(e) => {
                log_warn!("Auth: Logout failed: {}", e);
                Err(e)
            }
        }
    }

    /// Validate, then register. Backend failures become a `general` error.
    pub async fn submit_registration(&self, form: &RegisterForm) -> FormOutcome<User> {
        let errors = form.validate();
        if !errors.is_empty() {
            return FormOutcome::Rejected(errors);
        }

        match self.register(form).await {
            Ok(user) => FormOutcome::saved(user, REGISTERED_MESSAGE),
            Err(_) => FormOutcome::general(REGISTER_FAILED_MESSAGE),
        }
    }

    /// Validate, then log in. Backend failures become a `general` error.
    pub async fn submit_login(&self, form: &LoginForm) -> FormOutcome<User> {
        let errors = form.validate();
        if !errors.is_empty() {
            return FormOutcome::Rejected(errors);
        }

        match self.login(form).await {
            Ok(user) => {
                let message = format!("Welcome back, {}!", user.username);
                FormOutcome::saved(user, &message)
            }
            Err(_) => FormOutcome::general(LOGIN_FAILED_MESSAGE),
        }
    }

    pub async fn current_user(&self) -> Option<User> {
        self.user.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.user.read().await.is_some()
    }

    /// Guard for protected pages
    pub async fn require_user(&self) -> AppResult<User> {
        self.current_user()
            .await
            .ok_or_else(|| AppError::Unauthorized("You must be logged in".to_string()))
    }

    async fn accept(&self, action: &str, response: AuthResponse) -> AppResult<User> {
        match response.user {
            Some(user) => {
                *self.user.write().await = Some(user.clone());
                Ok(user)
            }
            None => {
                log_warn!("Auth: {} response carried no user", action);
                Err(AppError::ApiError(format!("{} failed: no user in response", action)))
            }
        }
    }
}
