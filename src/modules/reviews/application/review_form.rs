use crate::shared::validation::{
    FieldErrors, FieldRule, FieldValue, FormSource, MaxLength, MinLength, Range, Required,
    ValidationSchema,
};
use std::sync::{Arc, LazyLock};

pub const DEFAULT_RATING: i64 = 5;

static REVIEW_SCHEMA: LazyLock<ValidationSchema> = LazyLock::new(|| {
    let text_rules: Vec<Arc<dyn FieldRule>> = vec![
        Arc::new(Required::new("Review text is required.")),
        Arc::new(MinLength::new(10, "The review must be at least 10 characters.")),
        Arc::new(MaxLength::new(
            1000,
            "The review cannot be longer than 1000 characters.",
        )),
    ];
    let rating_rules: Vec<Arc<dyn FieldRule>> = vec![
        Arc::new(Required::new("You must give a rating.")),
        Arc::new(Range::new(
            1,
            5,
            "The rating cannot be lower than 1.",
            "The rating cannot be higher than 5.",
        )),
    ];

    ValidationSchema::new()
        .field("reviewText", text_rules)
        .field("rating", rating_rules)
});

/// Review editor contents. `rating` is `None` when the number input is blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewForm {
    pub review_text: String,
    pub rating: Option<i64>,
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self {
            review_text: String::new(),
            rating: Some(DEFAULT_RATING),
        }
    }
}

impl ReviewForm {
    pub fn new(review_text: &str, rating: i64) -> Self {
        Self {
            review_text: review_text.to_string(),
            rating: Some(rating),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        REVIEW_SCHEMA.validate(self)
    }
}

impl FormSource for ReviewForm {
    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "reviewText" => FieldValue::Text(&self.review_text),
            "rating" => FieldValue::Number(self.rating),
            _ => FieldValue::Missing,
        }
    }
}
