use std::collections::HashMap;

use crate::model::field::Field;

/// Per-field validation messages computed by the external validator.
///
/// The editors only ever read this map: a missing entry or an empty message
/// means the field is currently valid, a non-empty message marks the field
/// invalid and is displayed verbatim next to it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    messages: HashMap<Field, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the validator's result for `field`, clearing the entry on `None`.
    pub fn set(&mut self, field: Field, error: Option<String>) {
        match error {
            Some(message) => {
                self.messages.insert(field, message);
            }
            None => {
                self.messages.remove(&field);
            }
        }
    }

    /// The message marking `field` invalid, if any. Empty stored messages
    /// count as valid and yield `None`.
    pub fn message(&self, field: Field) -> Option<&str> {
        self.messages
            .get(&field)
            .map(String::as_str)
            .filter(|m| !m.is_empty())
    }

    pub fn is_invalid(&self, field: Field) -> bool {
        self.message(field).is_some()
    }

    /// `true` when no field currently carries a non-empty message.
    pub fn is_empty(&self) -> bool {
        self.messages.values().all(|m| m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entry_means_valid() {
        let errors = FieldErrors::new();
        assert_eq!(errors.message(Field::Phone), None);
        assert!(!errors.is_invalid(Field::Phone));
    }

    #[test]
    fn empty_message_means_valid() {
        let mut errors = FieldErrors::new();
        errors.set(Field::Phone, Some(String::new()));
        assert_eq!(errors.message(Field::Phone), None);
        assert!(!errors.is_invalid(Field::Phone));
    }

    #[test]
    fn non_empty_message_is_returned_verbatim() {
        let mut errors = FieldErrors::new();
        errors.set(Field::Phone, Some("Invalid format".to_string()));
        assert_eq!(errors.message(Field::Phone), Some("Invalid format"));
        assert!(errors.is_invalid(Field::Phone));
        // Other fields stay valid.
        assert_eq!(errors.message(Field::Email), None);
    }

    #[test]
    fn set_none_clears_a_previous_error() {
        let mut errors = FieldErrors::new();
        errors.set(Field::Email, Some("Invalid email".to_string()));
        errors.set(Field::Email, None);
        assert!(!errors.is_invalid(Field::Email));
        assert!(errors.is_empty());
    }
}
