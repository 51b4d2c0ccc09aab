//! Interactive contact form component.
//!
//! Wraps a `ContactFormEngine` with focus handling and a single-line editor
//! (`tui_input::Input`) for the focused field. Every edit that changes the
//! editor's value is forwarded to the engine as one field change, so errors
//! update on each keystroke. Rendering lives in `render.rs`.
//!
//! Keys:
//! - Tab / Down, Shift-Tab / Up : move focus (fields, then the Submit button)
//! - Enter                      : submit from anywhere
//! - Space on Submit            : submit
//! - anything else              : edits the focused field

mod render;

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};
use tui_input::{Input, InputRequest};

use crate::{
    action::{Action, UiOutcome},
    components::Component,
    form::{ContactFormEngine, FieldKey, FormSchema, SubmitOutcome},
    tui::{EventResponse, Frame},
};

pub use render::render_contact_form;

pub struct ContactForm {
    engine: ContactFormEngine,
    // index into the schema's fields; `field_count()` means the Submit button
    focused: usize,
    input: Input,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(crate::form::contact_schema())
    }
}

impl ContactForm {
    pub fn new(schema: FormSchema) -> Self {
        let mut form = Self {
            engine: ContactFormEngine::new(schema),
            focused: 0,
            input: Input::default(),
        };
        form.load_input();
        form
    }

    pub fn engine(&self) -> &ContactFormEngine {
        &self.engine
    }

    /// Focused field, `None` when the Submit button has focus.
    pub fn focused_field(&self) -> Option<FieldKey> {
        self.engine
            .schema()
            .fields
            .get(self.focused)
            .map(|field| field.key)
    }

    pub fn is_submit_focused(&self) -> bool {
        self.focused == self.field_count()
    }

    /// Move focus straight to `key` (no-op for keys missing from the schema).
    pub fn focus_field(&mut self, key: FieldKey) {
        if let Some(idx) = self
            .engine
            .schema()
            .fields
            .iter()
            .position(|field| field.key == key)
        {
            self.focused = idx;
            self.load_input();
        }
    }

    pub(super) fn input(&self) -> &Input {
        &self.input
    }

    fn field_count(&self) -> usize {
        self.engine.schema().field_count()
    }

    fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % (self.field_count() + 1);
        self.load_input();
    }

    fn focus_prev(&mut self) {
        if self.focused == 0 {
            self.focused = self.field_count();
        } else {
            self.focused -= 1;
        }
        self.load_input();
    }

    fn load_input(&mut self) {
        self.input = match self.focused_field() {
            Some(key) => Input::new(self.engine.fields().get(key).to_string()),
            None => Input::default(),
        };
    }

    fn commit_input(&mut self) {
        if let Some(key) = self.focused_field() {
            self.engine.change(key, self.input.value());
        }
    }

    fn submit(&mut self) -> Result<Option<Action>> {
        match self.engine.submit() {
            SubmitOutcome::Accepted(snapshot) => {
                info!("contact form submitted");
                let json = serde_json::to_value(&snapshot)?;
                Ok(Some(Action::UiOutcome(UiOutcome::SubmitJson(json))))
            }
            SubmitOutcome::Rejected(errors) => {
                info!(errors = errors.len(), "contact form submission rejected");
                Ok(Some(Action::Update))
            }
        }
    }
}

/// Map editing keys onto line editor requests. Navigation and submit keys
/// are handled before this is consulted.
fn to_input_request(key: KeyEvent) -> Option<InputRequest> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('u') if ctrl => Some(InputRequest::DeleteLine),
        KeyCode::Char('k') if ctrl => Some(InputRequest::DeleteTillEnd),
        KeyCode::Char('w') if ctrl => Some(InputRequest::DeletePrevWord),
        KeyCode::Char('a') if ctrl => Some(InputRequest::GoToStart),
        KeyCode::Char('e') if ctrl => Some(InputRequest::GoToEnd),
        KeyCode::Char(_) if ctrl || alt => None,
        KeyCode::Char(c) => Some(InputRequest::InsertChar(c)),
        KeyCode::Backspace if ctrl || alt => Some(InputRequest::DeletePrevWord),
        KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
        KeyCode::Delete if ctrl || alt => Some(InputRequest::DeleteNextWord),
        KeyCode::Delete => Some(InputRequest::DeleteNextChar),
        KeyCode::Left if ctrl => Some(InputRequest::GoToPrevWord),
        KeyCode::Left => Some(InputRequest::GoToPrevChar),
        KeyCode::Right if ctrl => Some(InputRequest::GoToNextWord),
        KeyCode::Right => Some(InputRequest::GoToNextChar),
        KeyCode::Home => Some(InputRequest::GoToStart),
        KeyCode::End => Some(InputRequest::GoToEnd),
        _ => None,
    }
}

impl Component for ContactForm {
    fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<EventResponse<Action>>> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                Ok(Some(EventResponse::Stop(Action::Update)))
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                Ok(Some(EventResponse::Stop(Action::Update)))
            }
            KeyCode::Enter => Ok(Some(EventResponse::Stop(Action::Submit))),
            KeyCode::Esc => Ok(None),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Ok(None),
            _ if self.is_submit_focused() => match key.code {
                KeyCode::Char(' ') => Ok(Some(EventResponse::Stop(Action::Submit))),
                _ => Ok(None),
            },
            _ => {
                let changed = to_input_request(key)
                    .and_then(|req| self.input.handle(req))
                    .map(|state| state.value)
                    .unwrap_or(false);
                if changed {
                    self.commit_input();
                }
                Ok(Some(EventResponse::Stop(Action::Update)))
            }
        }
    }

    fn handle_paste(&mut self, text: String) -> Result<Option<EventResponse<Action>>> {
        if self.focused_field().is_none() || text.is_empty() {
            return Ok(None);
        }
        let mut changed = false;
        for c in text.chars().filter(|c| !c.is_control()) {
            changed |= self
                .input
                .handle(InputRequest::InsertChar(c))
                .is_some_and(|state| state.value);
        }
        if !changed {
            return Ok(None);
        }
        self.commit_input();
        debug!(chars = text.chars().count(), "pasted into field");
        Ok(Some(EventResponse::Stop(Action::Update)))
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Submit => self.submit(),
            _ => Ok(None),
        }
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: ratatui::layout::Rect) -> Result<()> {
        render_contact_form(self, f, area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn press(form: &mut ContactForm, code: KeyCode) -> Option<EventResponse<Action>> {
        form.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    fn type_text(form: &mut ContactForm, text: &str) {
        for c in text.chars() {
            press(form, KeyCode::Char(c));
        }
    }

    #[test]
    fn focus_cycles_through_fields_and_submit() {
        let mut form = ContactForm::default();
        assert_eq!(form.focused_field(), Some(FieldKey::FirstName));
        for expected in [
            Some(FieldKey::LastName),
            Some(FieldKey::Email),
            Some(FieldKey::Message),
            None,
            Some(FieldKey::FirstName),
        ] {
            press(&mut form, KeyCode::Tab);
            assert_eq!(form.focused_field(), expected);
        }
        press(&mut form, KeyCode::BackTab);
        assert!(form.is_submit_focused());
    }

    #[test]
    fn typing_updates_the_focused_field() {
        let mut form = ContactForm::default();
        type_text(&mut form, "Ryan");
        press(&mut form, KeyCode::Backspace);
        assert_eq!(form.engine().fields().first_name, "Rya");
        assert_eq!(
            form.engine().visible_error(FieldKey::FirstName),
            Some("firstName must have at least 5 characters")
        );
    }

    #[test]
    fn refocusing_keeps_typed_value() {
        let mut form = ContactForm::default();
        type_text(&mut form, "Ryan");
        press(&mut form, KeyCode::Tab);
        press(&mut form, KeyCode::BackTab);
        type_text(&mut form, "M");
        assert_eq!(form.engine().fields().first_name, "RyanM");
        assert_eq!(form.engine().visible_error(FieldKey::FirstName), None);
    }

    #[test]
    fn enter_requests_submit() {
        let mut form = ContactForm::default();
        assert_eq!(
            press(&mut form, KeyCode::Enter),
            Some(EventResponse::Stop(Action::Submit))
        );
    }

    #[test]
    fn escape_falls_through_to_the_app() {
        let mut form = ContactForm::default();
        assert_eq!(press(&mut form, KeyCode::Esc), None);
    }

    #[test]
    fn rejected_submit_only_requests_redraw() {
        let mut form = ContactForm::default();
        assert_eq!(form.update(Action::Submit).unwrap(), Some(Action::Update));
        assert_eq!(form.engine().visible_errors().len(), 3);
    }

    #[test]
    fn accepted_submit_reports_json() {
        let mut form = ContactForm::default();
        type_text(&mut form, "RyanM");
        form.focus_field(FieldKey::LastName);
        type_text(&mut form, "Magro");
        form.focus_field(FieldKey::Email);
        type_text(&mut form, "me@me.com");

        let action = form.update(Action::Submit).unwrap();
        let Some(Action::UiOutcome(UiOutcome::SubmitJson(json))) = action else {
            panic!("expected a submission outcome");
        };
        assert_eq!(json["firstName"], "RyanM");
        assert_eq!(json["email"], "me@me.com");
        assert_eq!(json["message"], "");
    }

    #[test]
    fn paste_inserts_at_cursor() {
        let mut form = ContactForm::default();
        form.focus_field(FieldKey::Email);
        type_text(&mut form, "me@.com");
        for _ in 0..4 {
            press(&mut form, KeyCode::Left);
        }
        form.handle_paste("me".to_string()).unwrap();
        assert_eq!(form.engine().fields().email, "me@me.com");
        assert_eq!(form.engine().visible_error(FieldKey::Email), None);
    }

    #[test]
    fn ctrl_u_clears_the_field() {
        let mut form = ContactForm::default();
        type_text(&mut form, "Ryan");
        form.handle_key_events(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(form.engine().fields().first_name, "");
        assert!(form.engine().visible_error(FieldKey::FirstName).is_some());
    }

    #[test]
    fn shifted_characters_are_inserted() {
        let mut form = ContactForm::default();
        form.handle_key_events(KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT))
            .unwrap();
        assert_eq!(form.engine().fields().first_name, "R");
    }

    #[test]
    fn control_only_paste_leaves_field_untouched() {
        let mut form = ContactForm::default();
        assert!(form.handle_paste("\n\t".into()).unwrap().is_none());
        assert_eq!(form.engine().fields().first_name, "");
        assert_eq!(form.engine().visible_error(FieldKey::FirstName), None);
    }

    #[test]
    fn paste_on_submit_button_is_ignored() {
        let mut form = ContactForm::default();
        for _ in 0..4 {
            press(&mut form, KeyCode::Tab);
        }
        assert!(form.handle_paste("text".into()).unwrap().is_none());
    }
}
