use crate::modules::account::AuthContext;
use crate::modules::likes::domain::{LikeRepository, LikedBook};
use crate::shared::errors::AppResult;
use crate::{log_debug, log_info, log_warn};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Liked books of the signed-in user, mirrored locally so like buttons
/// render without a round trip.
///
/// Toggles are applied to the local set first and rolled back if the backend
/// rejects them; [`LikeService::refresh`] replaces the local set with the
/// backend's view.
pub struct LikeService {
    repository: Arc<dyn LikeRepository>,
    auth: Arc<AuthContext>,
    liked: RwLock<BTreeMap<String, LikedBook>>,
}

impl LikeService {
    pub fn new(repository: Arc<dyn LikeRepository>, auth: Arc<AuthContext>) -> Self {
        Self {
            repository,
            auth,
            liked: RwLock::new(BTreeMap::new()),
        }
    }

    /// Reload the liked list from the backend
    pub async fn refresh(&self) -> AppResult<usize> {
        self.auth.require_user().await?;

        let books = self.repository.list().await?;
        let mut liked = self.liked.write().await;
        *liked = books
            .into_iter()
            .map(|book| (book.book_id.clone(), book))
            .collect();

        log_debug!("Likes: refreshed, {} liked books", liked.len());
        Ok(liked.len())
    }

    /// Flip the like state of a book. Returns the new state.
    pub async fn toggle(&self, book: LikedBook) -> AppResult<bool> {
        self.auth.require_user().await?;

        let book_id = book.book_id.clone();
        let previous = {
            let mut liked = self.liked.write().await;
            match liked.remove(&book_id) {
                Some(previous) => Some(previous),
                None => {
                    liked.insert(book_id.clone(), book.clone());
                    None
                }
            }
        };
        let now_liked = previous.is_none();

        let result = if now_liked {
            self.repository.like(&book).await
        } else {
            self.repository.unlike(&book_id).await
        };

        match result {
            Ok(()) => {
                log_info!(
                    "Likes: '{}' {}",
                    book.title,
                    if now_liked { "liked" } else { "unliked" }
                );
                Ok(now_liked)
            }
            Err(e) => {
                log_warn!("Likes: toggling '{}' failed, rolling back: {}", book_id, e);
                let mut liked = self.liked.write().await;
                match previous {
                    Some(previous) => {
                        liked.insert(book_id, previous);
                    }
                    None => {
                        liked.remove(&book_id);
                    }
                }
                Err(e)
            }
        }
    }

    pub async fn is_liked(&self, book_id: &str) -> bool {
        self.liked.read().await.contains_key(book_id)
    }

    pub async fn liked_books(&self) -> Vec<LikedBook> {
        self.liked.read().await.values().cloned().collect()
    }

    /// Forget the local set, e.g. after logout
    pub async fn clear(&self) {
        self.liked.write().await.clear();
    }
}
