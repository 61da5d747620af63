pub mod book;

pub use book::{BookDetails, BookSummary};
