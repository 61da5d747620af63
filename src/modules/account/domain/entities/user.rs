use crate::shared::utils::ids::string_or_number;
use serde::{Deserialize, Serialize};

/// A signed-in account. The backend also returns the password hash; it is
/// dropped on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    pub email: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RegisterCredentials {
    pub email: String,
    pub password: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Body of a successful register or login call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
}
