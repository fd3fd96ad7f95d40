// =============================================================================
// Gravity Web - Contact Form Validation
// =============================================================================
// Table of Contents:
// 1. Form Data
// 2. Error Types
// 3. Validator
// =============================================================================

use thiserror::Error;

use crate::utils::{is_valid_email, is_valid_phone};

/// Minimum trimmed length for the name field.
pub const NAME_MIN_LEN: usize = 3;
/// Minimum trimmed length for the message field.
pub const MESSAGE_MIN_LEN: usize = 10;

// -----------------------------------------------------------------------------
// 1. Form Data
// -----------------------------------------------------------------------------

/// Snapshot of the contact form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub number: String,
    pub message: String,
}

/// The four contact form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Number,
    Message,
}

// -----------------------------------------------------------------------------
// 2. Error Types
// -----------------------------------------------------------------------------

/// Why a single field failed validation.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    #[error("required")]
    Required,
    #[error("too short")]
    TooShort,
    #[error("invalid format")]
    InvalidFormat,
}

/// Per-field validation results. `None` means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub number: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FormErrors {
    /// Look up the error recorded for one field.
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Number => self.number,
            Field::Message => self.message,
        }
    }

    /// The inline message to show under one field, if it failed.
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.get(field).map(|error| error_message(field, error))
    }

    /// Number of invalid fields.
    pub fn len(&self) -> usize {
        [self.name, self.email, self.number, self.message]
            .iter()
            .filter(|slot| slot.is_some())
            .count()
    }

    /// True when every field passed validation.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// User-facing message for a failed field.
fn error_message(field: Field, error: FieldError) -> &'static str {
    match (field, error) {
        (Field::Name, FieldError::Required) => "Name is required.",
        (Field::Name, _) => "Name must be at least 3 characters.",
        (Field::Email, FieldError::Required) => "Email is required.",
        (Field::Email, _) => "Enter a valid email address.",
        (Field::Number, FieldError::Required) => "Contact number is required.",
        (Field::Number, _) => "Enter a valid phone number (10-15 digits).",
        (Field::Message, FieldError::Required) => "Message cannot be empty.",
        (Field::Message, _) => "Message should be at least 10 characters.",
    }
}

// -----------------------------------------------------------------------------
// 3. Validator
// -----------------------------------------------------------------------------

/// Validate a form snapshot. Every field is checked independently, so all
/// failing fields are reported together.
pub fn validate(form: &ContactForm) -> FormErrors {
    FormErrors {
        name: validate_name(&form.name),
        email: validate_email(&form.email),
        number: validate_number(&form.number),
        message: validate_message(&form.message),
    }
}

fn validate_name(name: &str) -> Option<FieldError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Some(FieldError::Required)
    } else if trimmed.chars().count() < NAME_MIN_LEN {
        Some(FieldError::TooShort)
    } else {
        None
    }
}

fn validate_email(email: &str) -> Option<FieldError> {
    if email.trim().is_empty() {
        Some(FieldError::Required)
    } else if !is_valid_email(email) {
        Some(FieldError::InvalidFormat)
    } else {
        None
    }
}

fn validate_number(number: &str) -> Option<FieldError> {
    if number.trim().is_empty() {
        Some(FieldError::Required)
    } else if !is_valid_phone(number) {
        Some(FieldError::InvalidFormat)
    } else {
        None
    }
}

fn validate_message(message: &str) -> Option<FieldError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        Some(FieldError::Required)
    } else if trimmed.chars().count() < MESSAGE_MIN_LEN {
        Some(FieldError::TooShort)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Alice Smith".to_string(),
            email: "alice@example.com".to_string(),
            number: "9876543210".to_string(),
            message: "I would like a quote please".to_string(),
        }
    }

    #[test]
    fn test_empty_form_reports_all_required() {
        let errors = validate(&ContactForm::default());

        assert_eq!(errors.len(), 4);
        assert_eq!(errors.name, Some(FieldError::Required));
        assert_eq!(errors.email, Some(FieldError::Required));
        assert_eq!(errors.number, Some(FieldError::Required));
        assert_eq!(errors.message, Some(FieldError::Required));
    }

    #[test]
    fn test_whitespace_only_fields_are_required() {
        let form = ContactForm {
            name: "   ".to_string(),
            email: "\t".to_string(),
            number: " \n ".to_string(),
            message: "  ".to_string(),
        };

        let errors = validate(&form);
        assert_eq!(errors.len(), 4);
        assert!(errors.get(Field::Name) == Some(FieldError::Required));
        assert!(errors.get(Field::Message) == Some(FieldError::Required));
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let errors = validate(&valid_form());
        assert!(errors.is_empty());
        assert_eq!(errors, FormErrors::default());
    }

    #[test]
    fn test_short_name_reports_too_short_only() {
        let form = ContactForm {
            name: "Jo".to_string(),
            email: "a@b.com".to_string(),
            number: "1234567890".to_string(),
            message: "Hello there friend".to_string(),
        };

        let errors = validate(&form);
        assert_eq!(errors.name, Some(FieldError::TooShort));
        assert_eq!(errors.len(), 1);
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_name_boundary_at_three_chars() {
        let mut form = valid_form();
        form.name = "Jon".to_string();
        assert_eq!(validate(&form).name, None);

        form.name = "  Jo  ".to_string();
        assert_eq!(validate(&form).name, Some(FieldError::TooShort));
    }

    #[test]
    fn test_email_shapes() {
        let mut form = valid_form();

        form.email = "a@b.co".to_string();
        assert_eq!(validate(&form).email, None);

        form.email = "a@b".to_string();
        assert_eq!(validate(&form).email, Some(FieldError::InvalidFormat));

        form.email = "a.com".to_string();
        assert_eq!(validate(&form).email, Some(FieldError::InvalidFormat));

        form.email = "a b@c.de".to_string();
        assert_eq!(validate(&form).email, Some(FieldError::InvalidFormat));

        form.email = "a@b@c.de".to_string();
        assert_eq!(validate(&form).email, Some(FieldError::InvalidFormat));

        form.email = "a@.co".to_string();
        assert_eq!(validate(&form).email, Some(FieldError::InvalidFormat));
    }

    #[test]
    fn test_phone_digit_window() {
        let mut form = valid_form();

        form.number = "1234567890".to_string();
        assert_eq!(validate(&form).number, None);

        form.number = "123456789012345".to_string();
        assert_eq!(validate(&form).number, None);

        // Surrounding whitespace is trimmed before the digit check
        form.number = " 1234567890 ".to_string();
        assert_eq!(validate(&form).number, None);

        form.number = "123456789".to_string();
        assert_eq!(validate(&form).number, Some(FieldError::InvalidFormat));

        form.number = "1234567890123456".to_string();
        assert_eq!(validate(&form).number, Some(FieldError::InvalidFormat));

        form.number = "12345abcde".to_string();
        assert_eq!(validate(&form).number, Some(FieldError::InvalidFormat));

        form.number = "+1234567890".to_string();
        assert_eq!(validate(&form).number, Some(FieldError::InvalidFormat));
    }

    #[test]
    fn test_message_boundary_at_ten_chars() {
        let mut form = valid_form();

        form.message = "1234567890".to_string();
        assert_eq!(validate(&form).message, None);

        form.message = "123456789".to_string();
        assert_eq!(validate(&form).message, Some(FieldError::TooShort));

        form.message = "  123456789  ".to_string();
        assert_eq!(validate(&form).message, Some(FieldError::TooShort));
    }

    #[test]
    fn test_validator_is_idempotent() {
        let form = ContactForm {
            name: "Jo".to_string(),
            email: "nonsense".to_string(),
            number: "12".to_string(),
            message: String::new(),
        };

        assert_eq!(validate(&form), validate(&form));
        assert_eq!(validate(&valid_form()), validate(&valid_form()));
    }

    #[test]
    fn test_inline_messages_match_failed_fields() {
        let errors = validate(&ContactForm::default());
        assert_eq!(errors.message(Field::Name), Some("Name is required."));
        assert_eq!(errors.message(Field::Email), Some("Email is required."));

        let errors = validate(&valid_form());
        assert_eq!(errors.message(Field::Name), None);
        assert_eq!(errors.message(Field::Message), None);
    }
}
