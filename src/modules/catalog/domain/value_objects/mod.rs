pub mod canonical_query;
pub mod result_page;
pub mod search_state;

pub use canonical_query::QueryComposer;
pub use result_page::ResultPage;
pub use search_state::SearchState;
