//! Form runtime state: typed field values and derived validation errors.
//!
//! Kept free of UI / rendering concerns so the engine can be unit tested in
//! isolation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::FieldKey;

/// Current (possibly invalid) values of the contact form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::FirstName => &self.first_name,
            FieldKey::LastName => &self.last_name,
            FieldKey::Email => &self.email,
            FieldKey::Message => &self.message,
        }
    }

    /// Set (or replace) the value of a field.
    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        let slot = match key {
            FieldKey::FirstName => &mut self.first_name,
            FieldKey::LastName => &mut self.last_name,
            FieldKey::Email => &mut self.email,
            FieldKey::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

/// Field-keyed validation messages. A missing key means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<FieldKey, String>);

impl ValidationErrors {
    pub fn insert(&mut self, key: FieldKey, message: impl Into<String>) {
        self.0.insert(key, message.into());
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.0.get(&key).map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn keys(&self) -> Vec<FieldKey> {
        self.0.keys().copied().collect()
    }
}
