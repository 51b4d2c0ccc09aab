//! Form schema: the ordered field list plus presentation metadata (title,
//! sizing hints). Rules stay attached to each `FormField`.
//!
//! ```ignore
//! use contact_form::form::contact_schema;
//!
//! let schema = contact_schema().title("Get in touch").min_size(70, 32);
//! assert_eq!(schema.field_count(), 4);
//! ```

use super::{validate, FieldKey, FormField, FormFieldKind};

pub struct FormSchema {
    pub title: String,
    pub fields: Vec<FormField>,
    pub min_width: u16,
    pub min_height: u16,
}

impl FormSchema {
    /// Create a new schema with default sizing (width=60, height=32).
    pub fn new(title: impl Into<String>, fields: Vec<FormField>) -> Self {
        Self {
            title: title.into(),
            fields,
            min_width: 60,
            min_height: 32,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Override minimum size hints (clamped to sensible lower bounds).
    pub fn min_size(mut self, w: u16, h: u16) -> Self {
        self.min_width = w.max(40);
        self.min_height = h.max(10);
        self
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// The contact form: first name, last name, email and an optional message.
pub fn contact_schema() -> FormSchema {
    FormSchema::new(
        "Contact Form",
        vec![
            FormField::new(FieldKey::FirstName, FormFieldKind::Text)
                .required()
                .validator(validate::min_chars(FieldKey::FirstName, 5)),
            FormField::new(FieldKey::LastName, FormFieldKind::Text)
                .required()
                .validator(validate::required(FieldKey::LastName)),
            FormField::new(FieldKey::Email, FormFieldKind::Text)
                .required()
                .help("e.g. name@example.com")
                .validator(validate::email_address(FieldKey::Email)),
            FormField::new(FieldKey::Message, FormFieldKind::TextArea { rows: 3 }),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_schema_labels() {
        let schema = contact_schema();
        let labels: Vec<String> = schema.fields.iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["First Name*", "Last Name*", "Email*", "Message"]);
        assert_eq!(schema.title, "Contact Form");
    }

    #[test]
    fn min_size_is_clamped() {
        let schema = contact_schema().min_size(10, 2);
        assert_eq!((schema.min_width, schema.min_height), (40, 10));
    }

    #[test]
    fn message_has_no_rule() {
        let schema = contact_schema();
        let message = schema
            .fields
            .iter()
            .find(|f| f.key == FieldKey::Message)
            .unwrap();
        assert!(message.validator.is_none());
    }
}
