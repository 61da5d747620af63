pub mod entities;
pub mod repositories;

pub use entities::{NewReview, Review, ReviewUpdate};
pub use repositories::ReviewRepository;
