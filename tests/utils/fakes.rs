use async_trait::async_trait;
use bookscout_lib::modules::account::domain::{
    AccountGateway, AuthResponse, LoginCredentials, RegisterCredentials, User,
};
use bookscout_lib::modules::catalog::domain::{
    BookDetails, BookSummary, CatalogRepository, ResultPage,
};
use bookscout_lib::modules::likes::{LikeRepository, LikedBook};
use bookscout_lib::modules::reviews::domain::{NewReview, Review, ReviewRepository, ReviewUpdate};
use bookscout_lib::shared::errors::{AppError, AppResult};
use chrono::{Duration, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Catalog backed by fixed result lists per query, sliced by limit/offset
#[derive(Default)]
pub struct InMemoryCatalog {
    results: HashMap<String, Vec<BookSummary>>,
    volumes: HashMap<String, BookDetails>,
    offline: AtomicBool,
    calls: Mutex<Vec<(String, u32, u64)>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_results(mut self, query: &str, books: Vec<BookSummary>) -> Self {
        self.results.insert(query.to_string(), books);
        self
    }

    pub fn with_volume(mut self, details: BookDetails) -> Self {
        self.volumes.insert(details.id.clone(), details);
        self
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<(String, u32, u64)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn queries(&self) -> Vec<String> {
        self.calls().into_iter().map(|(query, _, _)| query).collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn search_volumes(&self, query: &str, limit: u32, offset: u64) -> AppResult<ResultPage> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), limit, offset));

        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::ExternalServiceError("connection refused".to_string()));
        }

        let all = self.results.get(query).cloned().unwrap_or_default();
        let items = all
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();

        Ok(ResultPage::new(items, all.len() as u64, limit))
    }

    async fn get_volume(&self, id: &str) -> AppResult<Option<BookDetails>> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::ExternalServiceError("connection refused".to_string()));
        }
        Ok(self.volumes.get(id).cloned())
    }
}

struct StoredAccount {
    user: User,
    password: String,
}

/// The users/reviews/likes backend kept in memory, with a single session
#[derive(Default)]
pub struct InMemoryBackend {
    accounts: Mutex<HashMap<String, StoredAccount>>,
    session: Mutex<Option<User>>,
    reviews: Mutex<Vec<Review>>,
    likes: Mutex<HashMap<String, Vec<LikedBook>>>,
    next_id: AtomicUsize,
    offline: AtomicBool,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn reviews(&self) -> Vec<Review> {
        self.reviews.lock().unwrap().clone()
    }

    pub fn likes_of(&self, user_id: &str) -> Vec<LikedBook> {
        self.likes
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    fn check_online(&self) -> AppResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::ExternalServiceError("backend unreachable".to_string()));
        }
        Ok(())
    }

    fn session_user(&self) -> AppResult<User> {
        self.session
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| AppError::Unauthorized("no session".to_string()))
    }

    fn next_id(&self) -> usize {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl AccountGateway for InMemoryBackend {
    async fn register(&self, credentials: &RegisterCredentials) -> AppResult<AuthResponse> {
        self.check_online()?;
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(&credentials.email) {
            return Err(AppError::ApiError("email already registered".to_string()));
        }

        let user = User {
            id: self.next_id().to_string(),
            email: credentials.email.clone(),
            username: credentials.username.clone(),
        };
        accounts.insert(
            credentials.email.clone(),
            StoredAccount {
                user: user.clone(),
                password: credentials.password.clone(),
            },
        );
        *self.session.lock().unwrap() = Some(user.clone());

        Ok(AuthResponse {
            user: Some(user),
            token: Some("session".to_string()),
        })
    }

    async fn login(&self, credentials: &LoginCredentials) -> AppResult<AuthResponse> {
        self.check_online()?;
        let accounts = self.accounts.lock().unwrap();
        match accounts.get(&credentials.email) {
            Some(account) if account.password == credentials.password => {
                *self.session.lock().unwrap() = Some(account.user.clone());
                Ok(AuthResponse {
                    user: Some(account.user.clone()),
                    token: Some("session".to_string()),
                })
            }
            _ => Err(AppError::Unauthorized("invalid credentials".to_string())),
        }
    }

    async fn logout(&self) -> AppResult<()> {
        self.check_online()?;
        *self.session.lock().unwrap() = None;
        Ok(())
    }
}

#[async_trait]
impl ReviewRepository for InMemoryBackend {
    async fn create(&self, review: &NewReview) -> AppResult<()> {
        self.check_online()?;
        let id = self.next_id();
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(id as i64);

        self.reviews.lock().unwrap().push(Review {
            id: format!("r{}", id),
            book_id: review.book_id.clone(),
            book_title: review.book_title.clone(),
            user_id: review.user_id.clone(),
            username: review.username.clone(),
            review_text: review.review_text.clone(),
            rating: review.rating,
            created,
        });
        Ok(())
    }

    async fn update(&self, review_id: &str, update: &ReviewUpdate) -> AppResult<()> {
        self.check_online()?;
        let mut reviews = self.reviews.lock().unwrap();
        let review = reviews
            .iter_mut()
            .find(|r| r.id == review_id)
            .ok_or_else(|| AppError::NotFound(format!("review {}", review_id)))?;
        review.review_text = update.review_text.clone();
        review.rating = update.rating;
        Ok(())
    }

    async fn delete(&self, review_id: &str) -> AppResult<()> {
        self.check_online()?;
        let mut reviews = self.reviews.lock().unwrap();
        let before = reviews.len();
        reviews.retain(|r| r.id != review_id);
        if reviews.len() == before {
            return Err(AppError::NotFound(format!("review {}", review_id)));
        }
        Ok(())
    }

    async fn list_for_book(&self, book_id: &str) -> AppResult<Vec<Review>> {
        self.check_online()?;
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.book_id == book_id)
            .cloned()
            .collect())
    }

    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<Review>> {
        self.check_online()?;
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl LikeRepository for InMemoryBackend {
    async fn list(&self) -> AppResult<Vec<LikedBook>> {
        self.check_online()?;
        let user = self.session_user()?;
        Ok(self.likes_of(&user.id))
    }

    async fn like(&self, book: &LikedBook) -> AppResult<()> {
        self.check_online()?;
        let user = self.session_user()?;
        let mut likes = self.likes.lock().unwrap();
        let entry = likes.entry(user.id).or_default();
        if !entry.iter().any(|b| b.book_id == book.book_id) {
            entry.push(book.clone());
        }
        Ok(())
    }

    async fn unlike(&self, book_id: &str) -> AppResult<()> {
        self.check_online()?;
        let user = self.session_user()?;
        if let Some(entry) = self.likes.lock().unwrap().get_mut(&user.id) {
            entry.retain(|b| b.book_id != book_id);
        }
        Ok(())
    }
}
