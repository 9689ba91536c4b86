//! Contact form contracts
//!
//! The contact form has three validated controls (`name`, `email`, `message`)
//! and an optional `service` select that is never validated.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::contact::validate;
//!
//! let result = validate("email", "  a@b.c ");
//! assert!(result.is_valid);
//! ```

mod validation;

pub use validation::{
    is_valid_email, validate, ContactField, FieldRule, Shape, ValidationFailure, ValidationResult,
};

use serde::{Deserialize, Serialize};

/// Aggregate message raised once when a submit attempt fails validation.
pub const FORM_ERRORS_MESSAGE: &str = "Veuillez corriger les erreurs dans le formulaire.";

/// Acknowledgment shown once the simulated send completes.
pub const FORM_SENT_MESSAGE: &str =
    "Message envoyé avec succès ! Nous vous recontacterons bientôt.";

/// Label of the submit button while the simulated send is in flight.
pub const FORM_SENDING_LABEL: &str = "Envoi en cours...";

/// Marker used to detect that a plan was already copied into the message.
pub const PLAN_PREFIX_MARKER: &str = "Plan sélectionné:";

/// Snapshot of the contact form as it would be sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub message: String,
}

impl ContactForm {
    /// Build a snapshot from `(control name, raw value)` pairs.
    ///
    /// Values are trimmed; unknown control names are ignored and an empty
    /// `service` is treated as "no plan selected".
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut form = Self::default();
        for (name, value) in pairs {
            let value = value.trim();
            match name {
                "name" => form.name = value.to_string(),
                "email" => form.email = value.to_string(),
                "message" => form.message = value.to_string(),
                "service" if !value.is_empty() => form.service = Some(value.to_string()),
                _ => {}
            }
        }
        form
    }

    /// Run every field rule and collect the failures, in field order.
    pub fn failures(&self) -> Vec<ValidationFailure> {
        [
            (ContactField::Name, self.name.as_str()),
            (ContactField::Email, self.email.as_str()),
            (ContactField::Message, self.message.as_str()),
        ]
        .into_iter()
        .filter_map(|(field, value)| field.rule().check(value).err())
        .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.failures().is_empty()
    }
}

/// Prefix `message` with the selected plan, unless a plan was already
/// copied into it or no plan is selected.
pub fn prepend_plan(message: &str, plan_label: &str) -> Option<String> {
    if plan_label.is_empty() || message.contains(PLAN_PREFIX_MARKER) {
        return None;
    }
    Some(format!("{} {}\n\n{}", PLAN_PREFIX_MARKER, plan_label, message))
}
