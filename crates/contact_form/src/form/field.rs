//! Field identity & metadata.
//!
//! - `FieldKey`: the four contact form inputs
//! - `FormFieldKind`: how an input is edited and drawn
//! - `FormField`: label, help text and optional validator for one input
//!
//! Usage:
//! ```ignore
//! use contact_form::form::{FieldKey, FormField, FormFieldKind};
//!
//! let field = FormField::new(FieldKey::LastName, FormFieldKind::Text)
//!     .required()
//!     .validator(|v| {
//!         if v.is_empty() {
//!             Err("lastName is a required field".into())
//!         } else {
//!             Ok(())
//!         }
//!     });
//! ```

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Identifies one input of the contact form.
///
/// `Display` yields the camelCase name used inside validation messages
/// (`firstName`, `lastName`, `email`, `message`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    FirstName,
    LastName,
    Email,
    Message,
}

impl FieldKey {
    /// Human readable title, used for labels and the submission summary.
    pub fn title(self) -> &'static str {
        match self {
            FieldKey::FirstName => "First Name",
            FieldKey::LastName => "Last Name",
            FieldKey::Email => "Email",
            FieldKey::Message => "Message",
        }
    }
}

/// Input widget kinds.
///
/// - Text draws a single line
/// - TextArea wraps its value over several rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFieldKind {
    Text,
    TextArea { rows: u16 },
}

pub type Validator = Box<dyn Fn(&str) -> std::result::Result<(), String> + Send + Sync>;

/// Declarative description of a form field.
///
/// `validator` receives the current value and returns `Err(message)` when the
/// value breaks the field's rule. Fields without a validator are always valid.
pub struct FormField {
    pub key: FieldKey,
    pub kind: FormFieldKind,
    pub required: bool,
    pub help: Option<String>,
    pub validator: Option<Validator>,
}

impl FormField {
    pub fn new(key: FieldKey, kind: FormFieldKind) -> Self {
        Self {
            key,
            kind,
            required: false,
            help: None,
            validator: None,
        }
    }

    /// Mark the field as required; the label gets a trailing `*`.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn validator(
        mut self,
        f: impl Fn(&str) -> std::result::Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.validator = Some(Box::new(f));
        self
    }

    /// Label as shown next to the input, e.g. `First Name*`.
    pub fn label(&self) -> String {
        if self.required {
            format!("{}*", self.key.title())
        } else {
            self.key.title().to_string()
        }
    }

    /// Run the validator (if any) against `value`.
    pub fn check(&self, value: &str) -> std::result::Result<(), String> {
        match &self.validator {
            Some(validator) => (validator)(value),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormField")
            .field("key", &self.key)
            .field("kind", &self.kind)
            .field("required", &self.required)
            .field("help", &self.help)
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn key_display_is_camel_case() {
        let names: Vec<String> = FieldKey::iter().map(|k| k.to_string()).collect();
        assert_eq!(names, ["firstName", "lastName", "email", "message"]);
    }

    #[test]
    fn required_fields_get_a_star() {
        let first = FormField::new(FieldKey::FirstName, FormFieldKind::Text).required();
        let message = FormField::new(FieldKey::Message, FormFieldKind::TextArea { rows: 3 });
        assert_eq!(first.label(), "First Name*");
        assert_eq!(message.label(), "Message");
    }

    #[test]
    fn field_without_validator_accepts_anything() {
        let message = FormField::new(FieldKey::Message, FormFieldKind::TextArea { rows: 3 });
        assert!(message.check("").is_ok());
        assert!(message.check("anything at all").is_ok());
    }
}
