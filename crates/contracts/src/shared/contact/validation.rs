//! Validation rules for contact form fields

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields that carry a validation rule.
///
/// Any other control name passes through unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// Control name as it appears in the `name` attribute.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(ContactField::Name),
            "email" => Some(ContactField::Email),
            "message" => Some(ContactField::Message),
            _ => None,
        }
    }

    /// The single rule attached to this field.
    pub const fn rule(&self) -> FieldRule {
        match self {
            ContactField::Name => FieldRule {
                field: ContactField::Name,
                min_length: Some(2),
                shape: None,
                required_error: "Le nom est requis",
                invalid_error: "Le nom doit contenir au moins 2 caractères",
            },
            ContactField::Email => FieldRule {
                field: ContactField::Email,
                min_length: None,
                shape: Some(Shape::Email),
                required_error: "L'email est requis",
                invalid_error: "Veuillez entrer une adresse email valide",
            },
            ContactField::Message => FieldRule {
                field: ContactField::Message,
                min_length: Some(10),
                shape: None,
                required_error: "Le message est requis",
                invalid_error: "Le message doit contenir au moins 10 caractères",
            },
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Syntactic shape a value must match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `local@domain.tld`, see [`is_valid_email`].
    Email,
}

impl Shape {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Shape::Email => is_valid_email(value),
        }
    }
}

/// Validation rule for one field.
///
/// Every rule marks its field as required; `min_length` counts UTF-16 code
/// units of the trimmed value, as the browser reports a value's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: ContactField,
    pub min_length: Option<usize>,
    pub shape: Option<Shape>,
    pub required_error: &'static str,
    pub invalid_error: &'static str,
}

impl FieldRule {
    /// Check a raw control value. The value is trimmed, never modified.
    pub fn check(&self, raw_value: &str) -> Result<(), ValidationFailure> {
        let value = raw_value.trim();

        if value.is_empty() {
            return Err(self.fail(self.required_error));
        }

        if let Some(min) = self.min_length {
            if value.encode_utf16().count() < min {
                return Err(self.fail(self.invalid_error));
            }
        }

        if let Some(shape) = self.shape {
            if !shape.matches(value) {
                return Err(self.fail(self.invalid_error));
            }
        }

        Ok(())
    }

    fn fail(&self, message: &str) -> ValidationFailure {
        ValidationFailure {
            field: self.field,
            message: message.to_string(),
        }
    }
}

/// The only error kind of the validator; always recovered by the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationFailure {
    pub field: ContactField,
    pub message: String,
}

/// Verdict for one field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error_message: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message.into()),
        }
    }
}

impl From<Result<(), ValidationFailure>> for ValidationResult {
    fn from(result: Result<(), ValidationFailure>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(failure) => Self::invalid(failure.message),
        }
    }
}

/// Validate a control by name. Names without a rule always pass.
pub fn validate(field_name: &str, raw_value: &str) -> ValidationResult {
    match ContactField::from_name(field_name) {
        Some(field) => field.rule().check(raw_value).into(),
        None => ValidationResult::valid(),
    }
}

/// Lax email shape check, equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
///
/// Exactly one `@`, no whitespace, a non-empty local part, and a domain
/// with a `.` that has at least one character on each side.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // `domain.len() - 1` is the byte index of the last char only for ASCII,
    // so compare against the start of the last char instead.
    let last_start = match domain.char_indices().last() {
        Some((idx, _)) => idx,
        None => return false,
    };
    domain
        .char_indices()
        .any(|(idx, c)| c == '.' && idx > 0 && idx < last_start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rule() {
        assert_eq!(validate("name", ""), ValidationResult::invalid("Le nom est requis"));
        assert_eq!(
            validate("name", "A"),
            ValidationResult::invalid("Le nom doit contenir au moins 2 caractères")
        );
        assert_eq!(validate("name", "Al"), ValidationResult::valid());
    }

    #[test]
    fn test_whitespace_is_trimmed_before_checking() {
        assert_eq!(validate("name", "   "), ValidationResult::invalid("Le nom est requis"));
        assert!(!validate("name", " A ").is_valid);
        assert!(validate("email", "  a@b.c\n").is_valid);
    }

    #[test]
    fn test_email_rule() {
        assert!(validate("email", "a@b.c").is_valid);
        assert_eq!(
            validate("email", "not-an-email"),
            ValidationResult::invalid("Veuillez entrer une adresse email valide")
        );
        assert_eq!(validate("email", ""), ValidationResult::invalid("L'email est requis"));
    }

    #[test]
    fn test_message_rule() {
        assert!(!validate("message", "short").is_valid);
        assert!(!validate("message", "123456789").is_valid);
        assert!(validate("message", "this is ok").is_valid);
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // one astral char is two units
        assert!(validate("name", "😀").is_valid);
        assert!(validate("message", &"😀".repeat(5)).is_valid);
        assert!(!validate("message", &"😀".repeat(4)).is_valid);
        assert!(!validate("name", "é").is_valid);
        assert!(validate("message", "éééééééééé").is_valid);
    }

    #[test]
    fn test_unknown_fields_pass() {
        assert_eq!(validate("service", ""), ValidationResult::valid());
        assert_eq!(validate("phone", "anything"), ValidationResult::valid());
    }

    #[test]
    fn test_email_shape_is_lax() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(is_valid_email("a@.b.c"));
        assert!(is_valid_email("a@b..c"));

        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("a@b@c.d"));
        assert!(!is_valid_email("a b@c.d"));
    }

    #[test]
    fn test_validation_failure_displays_message() {
        let failure = ContactField::Message.rule().check("hi").unwrap_err();
        assert_eq!(failure.field, ContactField::Message);
        assert_eq!(failure.to_string(), "Le message doit contenir au moins 10 caractères");
    }

    #[test]
    fn test_repeated_checks_are_stateless() {
        let rule = ContactField::Name.rule();
        assert!(rule.check("A").is_err());
        assert!(rule.check("Al").is_ok());
        assert!(rule.check("A").is_err());
    }
}
