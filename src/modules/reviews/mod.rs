pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{ReviewForm, ReviewService};
pub use domain::{Review, ReviewRepository};
pub use infrastructure::HttpReviewRepository;
