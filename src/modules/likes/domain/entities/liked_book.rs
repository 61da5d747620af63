use crate::modules::catalog::domain::BookSummary;
use serde::{Deserialize, Serialize};

/// A book on the user's liked list. Also the body of `POST /likes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikedBook {
    #[serde(rename = "bookId")]
    pub book_id: String,
    #[serde(rename = "bookTitle", alias = "title")]
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl From<&BookSummary> for LikedBook {
    fn from(book: &BookSummary) -> Self {
        Self {
            book_id: book.id.clone(),
            title: book.title.clone(),
            thumbnail: book.thumbnail_url.clone(),
        }
    }
}
