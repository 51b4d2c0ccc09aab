//! Validation rules and the pure validator.
//!
//! Rules are plain closures built by the helpers below and attached to schema
//! fields with `FormField::validator`. `validate` runs every field's rule
//! against a `FormFields` value and returns a fresh `ValidationErrors`.

use lazy_static::lazy_static;
use regex::Regex;

use super::{FieldKey, FormFields, FormSchema, ValidationErrors};

lazy_static! {
    /// local-part@domain: dot-separated atoms or a quoted string, then either a
    /// bracketed IPv4 literal or dotted labels ending in a 2+ letter TLD.
    static ref EMAIL_PATTERN: Regex = Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#
    )
    .expect("email pattern is a valid regex");
}

pub fn is_email_address(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Value must contain at least `min` characters.
pub fn min_chars(
    key: FieldKey,
    min: usize,
) -> impl Fn(&str) -> Result<(), String> + Send + Sync + 'static {
    move |v: &str| {
        if v.chars().count() >= min {
            Ok(())
        } else {
            Err(format!("{key} must have at least {min} characters"))
        }
    }
}

/// Value must not be empty.
pub fn required(key: FieldKey) -> impl Fn(&str) -> Result<(), String> + Send + Sync + 'static {
    move |v: &str| {
        if v.is_empty() {
            Err(format!("{key} is a required field"))
        } else {
            Ok(())
        }
    }
}

pub fn email_address(
    key: FieldKey,
) -> impl Fn(&str) -> Result<(), String> + Send + Sync + 'static {
    move |v: &str| {
        if is_email_address(v) {
            Ok(())
        } else {
            Err(format!("{key} must be a valid email address"))
        }
    }
}

/// Validate all fields of `fields` against the rules in `schema`.
pub fn validate(schema: &FormSchema, fields: &FormFields) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for field in &schema.fields {
        if let Err(msg) = field.check(fields.get(field.key)) {
            errors.insert(field.key, msg);
        }
    }
    errors
}
