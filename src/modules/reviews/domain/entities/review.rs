use crate::shared::utils::ids::string_or_number;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored review as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    pub book_id: String,
    pub book_title: String,
    #[serde(deserialize_with = "string_or_number")]
    pub user_id: String,
    pub username: String,
    pub review_text: String,
    pub rating: i64,
    pub created: DateTime<Utc>,
}

impl Review {
    pub fn is_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }

    /// `2024-05-01` style date for list rows
    pub fn created_display(&self) -> String {
        self.created.format("%Y-%m-%d").to_string()
    }
}

/// Body of `POST /reviews`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub review_text: String,
    pub rating: i64,
    pub book_id: String,
    pub book_title: String,
    pub user_id: String,
    pub username: String,
}

/// Body of `PUT /reviews/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUpdate {
    pub review_text: String,
    pub rating: i64,
}
