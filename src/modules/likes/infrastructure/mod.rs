pub mod http_like_repository;

pub use http_like_repository::HttpLikeRepository;
