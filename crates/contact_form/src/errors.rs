//! Error reporting for the binary.
//!
//! `color_eyre` renders propagated `Result` errors. Panics go through
//! [`report_panic`], which hands the terminal back to the shell before
//! anything is printed.

use std::panic::PanicHookInfo;
use std::sync::OnceLock;

use color_eyre::config::{HookBuilder, PanicHook};
use color_eyre::Result;
use tracing::error;

use crate::config::get_data_dir;

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Install the report hooks. Calling this more than once does nothing.
pub fn init() -> Result<()> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    let (panic_hook, eyre_hook) = report_hooks().try_into_hooks()?;
    eyre_hook.install()?;
    std::panic::set_hook(Box::new(move |info| report_panic(&panic_hook, info)));

    let _ = INSTALLED.set(());
    Ok(())
}

fn report_hooks() -> HookBuilder {
    HookBuilder::default()
        .panic_section(format!(
            "{} {} crashed. The log file in {} has the details.",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            get_data_dir().display()
        ))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
}

fn report_panic(panic_hook: &PanicHook, info: &PanicHookInfo<'_>) {
    if let Err(err) = crate::tui::restore() {
        error!("failed to restore the terminal after a panic: {err:?}");
    }

    let report = panic_hook.panic_report(info).to_string();
    error!(
        "contact form panicked: {}",
        strip_ansi_escapes::strip_str(&report)
    );

    #[cfg(not(debug_assertions))]
    {
        let metadata = human_panic::metadata!();
        let dump = human_panic::handle_dump(&metadata, info);
        if human_panic::print_msg(dump, &metadata).is_err() {
            eprintln!("{report}");
        }
    }

    #[cfg(debug_assertions)]
    better_panic::Settings::auto()
        .most_recent_first(false)
        .lineno_suffix(true)
        .verbosity(better_panic::Verbosity::Full)
        .create_panic_handler()(info);

    std::process::exit(libc::EXIT_FAILURE);
}
