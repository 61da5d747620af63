pub mod http_review_repository;

pub use http_review_repository::HttpReviewRepository;
