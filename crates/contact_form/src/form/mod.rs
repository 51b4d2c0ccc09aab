//! Contact form model: schema, runtime state, validation and the engine.
//!
//! - `field.rs`    : `FieldKey`, `FormFieldKind`, `FormField`
//! - `schema.rs`   : `FormSchema` and the contact form definition
//! - `state.rs`    : `FormFields`, `ValidationErrors`
//! - `validate.rs` : rule builders and the pure `validate` function
//! - `engine.rs`   : `ContactFormEngine` (change / submit / visible errors)
//! - `summary.rs`  : confirmation lines for a submitted snapshot
//!
//! Nothing here knows about the terminal; the interactive component lives in
//! `components::contact_form`.

pub mod engine;
pub mod field;
pub mod schema;
pub mod state;
pub mod summary;
pub mod validate;

pub use engine::{ContactFormEngine, SubmitOutcome};
pub use field::{FieldKey, FormField, FormFieldKind};
pub use schema::{contact_schema, FormSchema};
pub use state::{FormFields, ValidationErrors};
pub use summary::{summary_lines, SUMMARY_HEADING};
pub use validate::validate;
