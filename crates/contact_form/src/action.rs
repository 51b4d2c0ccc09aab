use serde::{Deserialize, Serialize};
use strum::Display;

/// Result reported by an interactive component once the user is done with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiOutcome {
    /// Accepted form submission, serialized field values.
    SubmitJson(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Error(String),
    Submit,
    Update,
    UiOutcome(UiOutcome),
}
