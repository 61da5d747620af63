use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;

use crate::modules::likes::domain::{LikeRepository, LikedBook};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::BackendClient;

/// `/likes` endpoints of the backend
pub struct HttpLikeRepository {
    client: Arc<BackendClient>,
}

impl HttpLikeRepository {
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LikeRepository for HttpLikeRepository {
    async fn list(&self) -> AppResult<Vec<LikedBook>> {
        self.client.get("/likes").await
    }

    async fn like(&self, book: &LikedBook) -> AppResult<()> {
        self.client
            .send_unit(Method::POST, "/likes", Some(book))
            .await
    }

    async fn unlike(&self, book_id: &str) -> AppResult<()> {
        let path = format!("/likes/{}", urlencoding::encode(book_id));
        self.client
            .send_unit::<()>(Method::DELETE, &path, None)
            .await
    }
}
