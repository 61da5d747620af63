pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::LikeService;
pub use domain::{LikeRepository, LikedBook};
pub use infrastructure::HttpLikeRepository;
