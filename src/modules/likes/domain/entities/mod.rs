pub mod liked_book;

pub use liked_book::LikedBook;
