use super::review_form::ReviewForm;
use crate::modules::account::AuthContext;
use crate::modules::reviews::domain::{NewReview, Review, ReviewRepository, ReviewUpdate};
use crate::shared::errors::AppResult;
use crate::shared::validation::FormOutcome;
use crate::{log_debug, log_info, log_warn};
use std::sync::Arc;

pub const LOGIN_REQUIRED_MESSAGE: &str = "You must be logged in to write a review.";
pub const REVIEW_SAVED_MESSAGE: &str = "The review has been saved!";
pub const REVIEW_UPDATED_MESSAGE: &str = "The review has been updated!";
pub const REVIEW_SAVE_FAILED_MESSAGE: &str = "Could not save the review.";
pub const REVIEW_UPDATE_FAILED_MESSAGE: &str = "Could not update the review.";

pub struct ReviewService {
    repository: Arc<dyn ReviewRepository>,
    auth: Arc<AuthContext>,
}

impl ReviewService {
    pub fn new(repository: Arc<dyn ReviewRepository>, auth: Arc<AuthContext>) -> Self {
        Self { repository, auth }
    }

    /// Write a review for a book as the signed-in user
    pub async fn submit(&self, book_id: &str, book_title: &str, form: &ReviewForm) -> FormOutcome<()> {
        let Some(user) = self.auth.current_user().await else {
            return FormOutcome::general(LOGIN_REQUIRED_MESSAGE);
        };

        let errors = form.validate();
        if !errors.is_empty() {
            log_debug!("Reviews: form rejected with {} errors", errors.len());
            return FormOutcome::Rejected(errors);
        }

        let review = NewReview {
            review_text: form.review_text.clone(),
            rating: form.rating.unwrap_or_default(),
            book_id: book_id.to_string(),
            book_title: book_title.to_string(),
            user_id: user.id,
            username: user.username,
        };

        match self.repository.create(&review).await {
            Ok(()) => {
                log_info!("Reviews: saved review of '{}' by {}", book_title, review.username);
                FormOutcome::saved((), REVIEW_SAVED_MESSAGE)
            }
            Err(e) => {
                log_warn!("Reviews: saving review of '{}' failed: {}", book_id, e);
                FormOutcome::general(REVIEW_SAVE_FAILED_MESSAGE)
            }
        }
    }

    /// Change text and rating of an existing review
    pub async fn edit(&self, review_id: &str, form: &ReviewForm) -> FormOutcome<()> {
        if !self.auth.is_authenticated().await {
            return FormOutcome::general(LOGIN_REQUIRED_MESSAGE);
        }

        let errors = form.validate();
        if !errors.is_empty() {
            return FormOutcome::Rejected(errors);
        }

        let update = ReviewUpdate {
            review_text: form.review_text.clone(),
            rating: form.rating.unwrap_or_default(),
        };

        match self.repository.update(review_id, &update).await {
            Ok(()) => {
                log_info!("Reviews: updated review {}", review_id);
                FormOutcome::saved((), REVIEW_UPDATED_MESSAGE)
            }
            Err(e) => {
                log_warn!("Reviews: updating review {} failed: {}", review_id, e);
                FormOutcome::general(REVIEW_UPDATE_FAILED_MESSAGE)
            }
        }
    }

    pub async fn delete(&self, review_id: &str) -> AppResult<()> {
        self.auth.require_user().await?;
        self.repository.delete(review_id).await?;
        log_info!("Reviews: deleted review {}", review_id);
        Ok(())
    }

    /// Reviews shown on a book's detail page, newest first
    pub async fn reviews_for_book(&self, book_id: &str) -> AppResult<Vec<Review>> {
        let mut reviews = self.repository.list_for_book(book_id).await?;
        newest_first(&mut reviews);
        Ok(reviews)
    }

    /// The signed-in user's reviews for the profile page, newest first
    pub async fn my_reviews(&self) -> AppResult<Vec<Review>> {
        let user = self.auth.require_user().await?;
        let mut reviews = self.repository.list_for_user(&user.id).await?;
        newest_first(&mut reviews);
        Ok(reviews)
    }
}

fn newest_first(reviews: &mut [Review]) {
    reviews.sort_by(|a, b| b.created.cmp(&a.created));
}
