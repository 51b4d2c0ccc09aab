use std::collections::BTreeSet;

use tracing::{debug, trace};

use super::{contact_schema, validate, FieldKey, FormFields, FormSchema, ValidationErrors};

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All rules passed; carries the new snapshot.
    Accepted(FormFields),
    /// At least one rule failed; the snapshot was left untouched.
    Rejected(ValidationErrors),
}

/// Validation state machine behind the contact form.
///
/// Holds the current field values, the errors derived from them, and the last
/// accepted submission. An error is only *visible* once its field has been
/// changed or a submit has been attempted, so a fresh form shows no errors
/// even though `errors()` already lists the empty required fields.
pub struct ContactFormEngine {
    schema: FormSchema,
    fields: FormFields,
    errors: ValidationErrors,
    touched: BTreeSet<FieldKey>,
    submit_attempted: bool,
    submitted: Option<FormFields>,
}

impl Default for ContactFormEngine {
    fn default() -> Self {
        Self::new(contact_schema())
    }
}

impl ContactFormEngine {
    pub fn new(schema: FormSchema) -> Self {
        let fields = FormFields::default();
        let errors = validate(&schema, &fields);
        Self {
            schema,
            fields,
            errors,
            touched: BTreeSet::new(),
            submit_attempted: false,
            submitted: None,
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Errors for the current field values, visible or not.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Last accepted submission, if any.
    pub fn submitted(&self) -> Option<&FormFields> {
        self.submitted.as_ref()
    }

    /// Apply a field change and re-validate.
    pub fn change(&mut self, key: FieldKey, value: impl Into<String>) {
        self.fields.set(key, value);
        self.touched.insert(key);
        self.errors = validate(&self.schema, &self.fields);
        trace!(field = %key, errors = self.errors.len(), "field changed");
    }

    /// Re-validate and, when every rule passes, replace the snapshot.
    ///
    /// Field values are kept either way.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.submit_attempted = true;
        self.errors = validate(&self.schema, &self.fields);
        if self.errors.is_empty() {
            self.submitted = Some(self.fields.clone());
            debug!("submission accepted");
            SubmitOutcome::Accepted(self.fields.clone())
        } else {
            debug!(errors = ?self.errors.keys(), "submission rejected");
            SubmitOutcome::Rejected(self.errors.clone())
        }
    }

    pub fn visible_error(&self, key: FieldKey) -> Option<&str> {
        if self.submit_attempted || self.touched.contains(&key) {
            self.errors.get(key)
        } else {
            None
        }
    }

    /// Visible errors in field order.
    pub fn visible_errors(&self) -> Vec<(FieldKey, &str)> {
        self.errors
            .iter()
            .filter(|(key, _)| self.submit_attempted || self.touched.contains(key))
            .collect()
    }
}
