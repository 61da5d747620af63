use super::validation_chain::{FieldRule, FieldValue};
use regex::Regex;

/// Field must be present: non-empty text or a number
pub struct Required {
    message: String,
}

impl Required {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl FieldRule for Required {
    fn check(&self, value: &FieldValue<'_>) -> Option<String> {
        match value {
            FieldValue::Text(text) if !text.is_empty() => None,
            FieldValue::Number(Some(_)) => None,
            _ => Some(self.message.clone()),
        }
    }

    fn rule_name(&self) -> &'static str {
        "Required"
    }
}

/// Minimum text length in characters
pub struct MinLength {
    min: usize,
    message: String,
}

impl MinLength {
    pub fn new(min: usize, message: &str) -> Self {
        Self {
            min,
            message: message.to_string(),
        }
    }
}

impl FieldRule for MinLength {
    fn check(&self, value: &FieldValue<'_>) -> Option<String> {
        match value {
            FieldValue::Text(text) if text.chars().count() < self.min => {
                Some(self.message.clone())
            }
            _ => None,
        }
    }

    fn rule_name(&self) -> &'static str {
        "MinLength"
    }
}

/// Maximum text length in characters
pub struct MaxLength {
    max: usize,
    message: String,
}

impl MaxLength {
    pub fn new(max: usize, message: &str) -> Self {
        Self {
            max,
            message: message.to_string(),
        }
    }
}

impl FieldRule for MaxLength {
    fn check(&self, value: &FieldValue<'_>) -> Option<String> {
        match value {
            FieldValue::Text(text) if text.chars().count() > self.max => {
                Some(self.message.clone())
            }
            _ => None,
        }
    }

    fn rule_name(&self) -> &'static str {
        "MaxLength"
    }
}

/// Inclusive numeric range with separate messages for each side.
/// An absent number passes; pair with [`Required`] when it must be set.
pub struct Range {
    min: i64,
    max: i64,
    below_message: String,
    above_message: String,
}

impl Range {
    pub fn new(min: i64, max: i64, below_message: &str, above_message: &str) -> Self {
        Self {
            min,
            max,
            below_message: below_message.to_string(),
            above_message: above_message.to_string(),
        }
    }
}

impl FieldRule for Range {
    fn check(&self, value: &FieldValue<'_>) -> Option<String> {
        match value {
            FieldValue::Number(Some(n)) if *n < self.min => Some(self.below_message.clone()),
            FieldValue::Number(Some(n)) if *n > self.max => Some(self.above_message.clone()),
            _ => None,
        }
    }

    fn rule_name(&self) -> &'static str {
        "Range"
    }
}

/// Text must match every pattern.
///
/// `skip_empty` lets an empty string through so a [`Required`] rule can own
/// that message.
pub struct PatternRule {
    patterns: Vec<Regex>,
    message: String,
    skip_empty: bool,
    name: &'static str,
}

impl PatternRule {
    pub fn new(patterns: Vec<Regex>, message: &str) -> Self {
        Self {
            patterns,
            message: message.to_string(),
            skip_empty: false,
            name: "Pattern",
        }
    }

    /// Email shape check; empty strings are left to [`Required`]
    pub fn email(pattern: Regex, message: &str) -> Self {
        Self {
            patterns: vec![pattern],
            message: message.to_string(),
            skip_empty: true,
            name: "Email",
        }
    }
}

impl FieldRule for PatternRule {
    fn check(&self, value: &FieldValue<'_>) -> Option<String> {
        match value {
            FieldValue::Text(text) if text.is_empty() && self.skip_empty => None,
            FieldValue::Text(text) if self.patterns.iter().all(|p| p.is_match(text)) => None,
            FieldValue::Text(_) => Some(self.message.clone()),
            _ => None,
        }
    }

    fn rule_name(&self) -> &'static str {
        self.name
    }
}
