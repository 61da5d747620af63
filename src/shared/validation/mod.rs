pub mod form_outcome;
pub mod validation_chain;
pub mod validation_rules;

pub use form_outcome::{FormOutcome, GENERAL_FIELD};
pub use validation_chain::{FieldErrors, FieldRule, FieldValue, FormSource, ValidationSchema};
pub use validation_rules::{MaxLength, MinLength, PatternRule, Range, Required};
