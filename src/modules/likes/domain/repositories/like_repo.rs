use async_trait::async_trait;

use crate::modules::likes::domain::entities::LikedBook;
use crate::shared::errors::AppResult;

/// The signed-in user's likes; the backend identifies the user from the session
#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<LikedBook>>;

    async fn like(&self, book: &LikedBook) -> AppResult<()>;

    async fn unlike(&self, book_id: &str) -> AppResult<()>;
}
