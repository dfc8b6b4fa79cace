//! Stand-in for the host application's validation engine.
//!
//! The editor never hard-codes business rules: it receives a validator
//! callback through its props and stores whatever message the callback
//! returns in the field-error map. This module supplies the default rules
//! the standalone shell injects: required-field emptiness plus email and
//! phone format checks. Optional fields are acceptable when empty.

use common::model::field::Field;
use regex::Regex;
use yew::Callback;

/// Validator injected by the application shell.
pub fn default_validator() -> Callback<(Field, String), Option<String>> {
    Callback::from(|(field, value): (Field, String)| validate(field, &value))
}

/// `Some(message)` when `value` is not acceptable for `field`.
pub fn validate(field: Field, value: &str) -> Option<String> {
    if value.is_empty() {
        return field
            .is_required()
            .then(|| "This field is required".to_string());
    }
    match field {
        Field::Email => (!is_email(value)).then(|| "Invalid email address".to_string()),
        Field::Phone | Field::Mobile => {
            (!is_phone(value)).then(|| "Invalid phone number".to_string())
        }
        _ => None,
    }
}

fn is_email(value: &str) -> bool {
    let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    re.is_match(value)
}

fn is_phone(value: &str) -> bool {
    let re = Regex::new(r"^\+?[0-9][0-9 \-().]{5,19}$").unwrap();
    re.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_optional_mobile_is_valid() {
        assert_eq!(validate(Field::Mobile, ""), None);
    }

    #[test]
    fn empty_required_fields_report_required() {
        assert_eq!(
            validate(Field::Phone, "").as_deref(),
            Some("This field is required")
        );
        assert_eq!(
            validate(Field::Email, "").as_deref(),
            Some("This field is required")
        );
    }

    #[test]
    fn well_formed_email_passes() {
        assert_eq!(validate(Field::Email, "clinic@example.com"), None);
    }

    #[test]
    fn malformed_email_is_rejected() {
        assert_eq!(
            validate(Field::Email, "clinic at example").as_deref(),
            Some("Invalid email address")
        );
        assert_eq!(
            validate(Field::Email, "clinic@example").as_deref(),
            Some("Invalid email address")
        );
    }

    #[test]
    fn phone_formats_are_checked() {
        assert_eq!(validate(Field::Phone, "(02) 8123 4567"), None);
        assert_eq!(validate(Field::Mobile, "+63 917 123 4567"), None);
        assert_eq!(
            validate(Field::Phone, "call me").as_deref(),
            Some("Invalid phone number")
        );
    }

    #[test]
    fn design_fields_accept_any_string() {
        assert_eq!(validate(Field::HeaderColor, "not-a-color"), None);
        assert_eq!(validate(Field::PaperColor, "#zzzzzz"), None);
    }
}
