use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;

use crate::modules::reviews::domain::{NewReview, Review, ReviewRepository, ReviewUpdate};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::BackendClient;

/// `/reviews` endpoints of the backend
pub struct HttpReviewRepository {
    client: Arc<BackendClient>,
}

impl HttpReviewRepository {
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }

    fn review_path(review_id: &str) -> String {
        format!("/reviews/{}", urlencoding::encode(review_id))
    }
}

#[async_trait]
impl ReviewRepository for HttpReviewRepository {
    async fn create(&self, review: &NewReview) -> AppResult<()> {
        self.client
            .send_unit(Method::POST, "/reviews", Some(review))
            .await
    }

    async fn update(&self, review_id: &str, update: &ReviewUpdate) -> AppResult<()> {
        self.client
            .send_unit(Method::PUT, &Self::review_path(review_id), Some(update))
            .await
    }

    async fn delete(&self, review_id: &str) -> AppResult<()> {
        self.client
            .send_unit::<()>(Method::DELETE, &Self::review_path(review_id), None)
            .await
    }

    async fn list_for_book(&self, book_id: &str) -> AppResult<Vec<Review>> {
        self.client
            .get(&format!("/reviews/book/{}", urlencoding::encode(book_id)))
            .await
    }

    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<Review>> {
        self.client
            .get(&format!("/reviews/user/{}", urlencoding::encode(user_id)))
            .await
    }
}
