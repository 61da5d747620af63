pub mod auth_context;
pub mod forms;

pub use auth_context::AuthContext;
pub use forms::{LoginForm, RegisterForm};
