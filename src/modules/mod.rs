pub mod account;
pub mod catalog;
pub mod likes;
pub mod reviews;
