use std::panic::{self, PanicHookInfo};
use std::path::Path;
use std::process;

use color_eyre::config::{HookBuilder, PanicHook};
use color_eyre::eyre::Result;

use crate::infrastructure::tui::{real::RealTui, TuiLike};

use super::logging::log_path;

/// Extra section appended to every panic report
fn crash_note(log: &Path) -> String {
    format!(
        "ThinkBucks crashed. Forum posts live in memory only and are gone; \
         your wallet session is kept. Please attach {} to a bug report.",
        log.display()
    )
}

/// Give the terminal back to the shell: raw mode off, alternate screen left
fn restore_terminal() {
    match RealTui::new() {
        Ok(mut tui) => {
            if let Err(e) = tui.exit() {
                log::error!("Unable to restore terminal after panic: {e:?}");
            }
        }
        Err(e) => log::error!("Unable to reopen terminal after panic: {e:?}"),
    }
}

#[cfg(not(debug_assertions))]
fn report(panic_hook: &PanicHook, panic_info: &PanicHookInfo<'_>) {
    use human_panic::{handle_dump, print_msg, Metadata};
    let meta = Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
        .authors(env!("CARGO_PKG_AUTHORS").replace(':', ", "))
        .homepage(env!("CARGO_PKG_HOMEPAGE"));
    let dump = handle_dump(&meta, panic_info);
    if let Err(e) = print_msg(dump, &meta) {
        eprintln!("human-panic: printing error message to console failed: {e}");
    }
    eprintln!("{}", panic_hook.panic_report(panic_info));
}

#[cfg(debug_assertions)]
fn report(_panic_hook: &PanicHook, panic_info: &PanicHookInfo<'_>) {
    better_panic::Settings::auto()
        .most_recent_first(false)
        .lineno_suffix(true)
        .verbosity(better_panic::Verbosity::Full)
        .create_panic_handler()(panic_info);
}

pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(crash_note(&log_path()))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();

        let plain = strip_ansi_escapes::strip_str(panic_hook.panic_report(panic_info).to_string());
        log::error!("Panic: {plain}");
        report(&panic_hook, panic_info);

        process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}
