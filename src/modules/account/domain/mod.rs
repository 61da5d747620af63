pub mod entities;
pub mod repositories;

pub use entities::{AuthResponse, LoginCredentials, RegisterCredentials, User};
pub use repositories::AccountGateway;
