pub mod user;

pub use user::{AuthResponse, LoginCredentials, RegisterCredentials, User};
