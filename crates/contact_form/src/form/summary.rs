use super::{FieldKey, FormFields};

pub const SUMMARY_HEADING: &str = "You Submitted:";

/// Confirmation lines for a submitted snapshot.
///
/// The message line is left out entirely when the message was empty.
pub fn summary_lines(snapshot: &FormFields) -> Vec<String> {
    [
        FieldKey::FirstName,
        FieldKey::LastName,
        FieldKey::Email,
        FieldKey::Message,
    ]
    .into_iter()
    .filter(|key| *key != FieldKey::Message || !snapshot.message.is_empty())
    .map(|key| format!("{}: {}", key.title(), snapshot.get(key)))
    .collect()
}
