pub mod entities;
pub mod repositories;

pub use entities::LikedBook;
pub use repositories::LikeRepository;
