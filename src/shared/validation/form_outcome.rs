use super::validation_chain::FieldErrors;
use serde::Serialize;

/// Key used for errors that do not belong to a single field
pub const GENERAL_FIELD: &str = "general";

/// What a form submission produced: the saved value with a confirmation, or
/// the errors to show next to the fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FormOutcome<T> {
    Saved { value: T, message: String },
    Rejected(FieldErrors),
}

impl<T> FormOutcome<T> {
    pub fn saved(value: T, message: &str) -> Self {
        FormOutcome::Saved {
            value,
            message: message.to_string(),
        }
    }

    /// Rejection carrying only a `general` message
    pub fn general(message: impl Into<String>) -> Self {
        FormOutcome::Rejected(FieldErrors::single(GENERAL_FIELD, message))
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, FormOutcome::Saved { .. })
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            FormOutcome::Rejected(errors) => Some(errors),
            FormOutcome::Saved { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            FormOutcome::Saved { message, .. } => Some(message),
            FormOutcome::Rejected(_) => None,
        }
    }
}
