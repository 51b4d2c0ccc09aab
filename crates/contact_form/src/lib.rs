//! Terminal contact form: first name, last name, email and an optional
//! message, validated on every keystroke, with a confirmation summary after
//! a successful submit.
//!
//! The validation state machine lives in [`form`] and has no terminal
//! dependencies; [`components::contact_form`] puts it on screen.

pub mod action;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod errors;
pub mod form;
pub mod logging;
pub mod tui;

use color_eyre::Result;

use crate::{app::App, cli::Cli};

pub async fn run(args: Cli) -> Result<()> {
    crate::errors::init()?;
    crate::logging::init()?;

    let mut app = App::new(args.tick_rate, args.frame_rate)?;
    app.run().await?;
    Ok(())
}
