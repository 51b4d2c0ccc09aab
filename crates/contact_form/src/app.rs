use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{prelude::Rect, Frame};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::{
    action::{Action, UiOutcome},
    components::{contact_form::ContactForm, Component},
    config::Config,
    tui::{Event, EventResponse, Tui},
};

/// Terminal host for the contact form: owns the component and drives the
/// event → action → update → draw loop.
pub struct App {
    pub config: Config,
    pub tick_rate: f64,
    pub frame_rate: f64,
    pub form: ContactForm,
    pub should_quit: bool,
}

impl App {
    pub fn new(tick_rate: f64, frame_rate: f64) -> Result<Self> {
        let config = Config::new()?;
        Ok(Self::with_config(config, tick_rate, frame_rate))
    }

    pub fn with_config(config: Config, tick_rate: f64, frame_rate: f64) -> Self {
        let form = ContactForm::new(config.schema());
        Self {
            config,
            tick_rate,
            frame_rate,
            form,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

        let mut tui = Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate);
        tui.enter()?;
        info!("contact form started");

        loop {
            if let Some(e) = tui.next().await {
                let stop_event_propagation = self
                    .form
                    .handle_events(e.clone())
                    .map(|response| match response {
                        Some(EventResponse::Continue(action)) => {
                            action_tx.send(action).ok();
                            false
                        }
                        Some(EventResponse::Stop(action)) => {
                            action_tx.send(action).ok();
                            true
                        }
                        _ => false,
                    })?;

                if !stop_event_propagation {
                    match e {
                        Event::Error(msg) => action_tx.send(Action::Error(msg))?,
                        Event::Tick => action_tx.send(Action::Tick)?,
                        Event::Render => action_tx.send(Action::Render)?,
                        Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
                        Event::Key(key) => {
                            if let Some(action) = self.global_key_action(key) {
                                action_tx.send(action)?;
                            }
                        }
                        _ => {}
                    }
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                if action != Action::Tick && action != Action::Render {
                    debug!("{action:?}");
                }
                match &action {
                    Action::Quit => self.should_quit = true,
                    Action::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, *w, *h))?;
                        tui.draw(|f| {
                            self.render(f).unwrap_or_else(|err| {
                                action_tx
                                    .send(Action::Error(format!("Failed to draw: {:?}", err)))
                                    .ok();
                            })
                        })?;
                    }
                    Action::Render => {
                        tui.draw(|f| {
                            self.render(f).unwrap_or_else(|err| {
                                action_tx
                                    .send(Action::Error(format!("Failed to draw: {:?}", err)))
                                    .ok();
                            })
                        })?;
                    }
                    Action::Error(msg) => tracing::error!("{msg}"),
                    Action::UiOutcome(UiOutcome::SubmitJson(json)) => {
                        debug!(submission = %json, "form outcome");
                    }
                    _ => {}
                }

                if let Some(action) = self.form.update(action)? {
                    action_tx.send(action)?
                };
            }

            if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        info!("contact form closed");
        Ok(())
    }

    /// Keys the form did not consume.
    fn global_key_action(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Quit)
            }
            KeyCode::Char('q') if self.form.is_submit_focused() => Some(Action::Quit),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame<'_>) -> Result<()> {
        let area = frame.area();
        self.form.draw(frame, area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::with_config(Config::default(), 4.0, 30.0)
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let app = app();
        assert_eq!(
            app.global_key_action(key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(
            app.global_key_action(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn q_quits_only_from_submit_button() {
        let mut app = app();
        assert_eq!(
            app.global_key_action(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            None
        );
        for _ in 0..4 {
            app.form
                .handle_key_events(key(KeyCode::Tab, KeyModifiers::NONE))
                .unwrap();
        }
        assert_eq!(
            app.global_key_action(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn default_config_uses_contact_form_title() {
        let app = app();
        assert_eq!(app.form.engine().schema().title, "Contact Form");
    }
}
