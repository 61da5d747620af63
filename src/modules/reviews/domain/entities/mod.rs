pub mod review;

pub use review::{NewReview, Review, ReviewUpdate};
