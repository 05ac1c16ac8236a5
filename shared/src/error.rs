use std::collections::BTreeMap;

use validator::ValidationErrors;

/// Failure of the asynchronous step behind a form submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OperationError {
    #[error("operation failed: {0}")]
    Failed(String),
    #[error("operation timed out")]
    TimedOut,
}

/// Per-field validation messages, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field`. The first message for a field wins.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
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

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, list) in errors.field_errors() {
            if let Some(first) = list.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                out.add(field.to_string(), message);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_message_for_a_field_is_kept() {
        let mut errors = FieldErrors::new();
        errors.add("email", "E-mail inválido");
        errors.add("email", "something else");
        assert_eq!(errors.get("email"), Some("E-mail inválido"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn remove_clears_only_that_field() {
        let mut errors = FieldErrors::new();
        errors.add("email", "a");
        errors.add("password", "b");
        errors.remove("email");
        assert!(!errors.contains("email"));
        assert!(errors.contains("password"));
    }
}
