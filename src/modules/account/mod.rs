pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{AuthContext, LoginForm, RegisterForm};
pub use domain::{AccountGateway, User};
pub use infrastructure::HttpAccountGateway;
