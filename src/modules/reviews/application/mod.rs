pub mod review_form;
pub mod service;

pub use review_form::ReviewForm;
pub use service::*;
