use async_trait::async_trait;

use crate::modules::reviews::domain::entities::{NewReview, Review, ReviewUpdate};
use crate::shared::errors::AppResult;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, review: &NewReview) -> AppResult<()>;

    async fn update(&self, review_id: &str, update: &ReviewUpdate) -> AppResult<()>;

    async fn delete(&self, review_id: &str) -> AppResult<()>;

    async fn list_for_book(&self, book_id: &str) -> AppResult<Vec<Review>>;

    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<Review>>;
}
