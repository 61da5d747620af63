pub mod search_loader;
pub mod search_session;
pub mod service;
pub mod url_state;

pub use search_loader::*;
pub use search_session::*;
pub use service::*;
pub use url_state::*;
