use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A single form field value as seen by validation rules
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(Option<i64>),
    /// The form has no field with this name
    Missing,
}

/// Anything that can hand field values to a [`ValidationSchema`]
pub trait FormSource {
    fn field_value(&self, field: &str) -> FieldValue<'_>;
}

/// Trait for per-field validation rules
pub trait FieldRule: Send + Sync {
    /// Returns the error message when the value breaks this rule
    fn check(&self, value: &FieldValue<'_>) -> Option<String>;

    /// Get the name of this rule for logging
    fn rule_name(&self) -> &'static str;
}

/// Mapping from field name to the first error message raised for it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors with a single entry, e.g. the `general` key for non-field failures
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert_first(field, message);
        errors
    }

    /// Record an error unless the field already has one
    pub fn insert_first(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

struct FieldEntry {
    name: &'static str,
    rules: Vec<Arc<dyn FieldRule>>,
}

/// Declarative set of field rules, evaluated synchronously before submission.
///
/// Every field is checked; within a field the rules run in declaration order
/// and only the first failure is reported.
#[derive(Clone, Default)]
pub struct ValidationSchema {
    fields: Vec<Arc<FieldEntry>>,
}

impl ValidationSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field with its ordered rules
    pub fn field(mut self, name: &'static str, rules: Vec<Arc<dyn FieldRule>>) -> Self {
        self.fields.push(Arc::new(FieldEntry { name, rules }));
        self
    }

    /// Validate a form, collecting the first error of every failing field
    pub fn validate(&self, form: &dyn FormSource) -> FieldErrors {
        let mut errors = FieldErrors::new();

        for field in &self.fields {
            let value = form.field_value(field.name);
            for rule in &field.rules {
                if let Some(message) = rule.check(&value) {
                    log::debug!(
                        "Validation rule '{}' failed for field '{}'",
                        rule.rule_name(),
                        field.name
                    );
                    errors.insert_first(field.name, message);
                    break;
                }
            }
        }

        errors
    }

    /// Get the number of fields in the schema
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}
