//! Logging utilities
//!
//! Everything goes to `<data dir>/thinkbucks.log`; the terminal belongs to the UI.

use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

use color_eyre::eyre::Result;
use lazy_static::lazy_static;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    filter::EnvFilter, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt, Layer,
};

use super::paths::{get_data_dir, LOG_ENV, LOG_FILE};

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase();
}

/// Where the log file lives
pub fn log_path() -> PathBuf {
    get_data_dir().join(LOG_FILE.as_str())
}

/// Filter directive: `RUST_LOG` first, then `THINKBUCKS_LOGLEVEL`, then info for this crate.
/// A bare level in `THINKBUCKS_LOGLEVEL` (e.g. `debug`) applies to this crate only.
fn filter_directive(rust_log: Option<String>, app_level: Option<String>) -> String {
    let crate_name = env!("CARGO_CRATE_NAME");
    let non_empty = |value: &String| !value.trim().is_empty();
    match (rust_log.filter(non_empty), app_level.filter(non_empty)) {
        (Some(directive), _) => directive,
        (None, Some(level)) if !level.contains('=') => format!("{crate_name}={}", level.trim()),
        (None, Some(directive)) => directive,
        (None, None) => format!("{crate_name}=info"),
    }
}

pub fn initialize_logging() -> Result<()> {
    let path = log_path();
    if let Some(directory) = path.parent() {
        fs::create_dir_all(directory)?;
    }
    let log_file = File::create(&path)?;

    let directive = filter_directive(
        env::var("RUST_LOG").ok(),
        env::var(LOG_ENV.as_str()).ok(),
    );
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("Ignoring invalid log filter {directive:?}: {e}");
        EnvFilter::new(filter_directive(None, None))
    });

    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(filter);
    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .init();
    log::info!("{} {} logging to {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), path.display());
    Ok(())
}

/// Similar to the `std::dbg!` macro, but generates `tracing` events rather
/// than printing to stdout.
///
/// By default, the verbosity level for the generated events is `DEBUG`, but
/// this can be customized.
#[macro_export]
macro_rules! trace_dbg {
    (target: $target:expr, level: $level:expr, $ex:expr) => {{
        match $ex {
            value => {
                tracing::event!(target: $target, $level, ?value, stringify!($ex));
                value
            }
        }
    }};
    (level: $level:expr, $ex:expr) => {
        trace_dbg!(target: module_path!(), level: $level, $ex)
    };
    (target: $target:expr, $ex:expr) => {
        trace_dbg!(target: $target, level: tracing::Level::DEBUG, $ex)
    };
    ($ex:expr) => {
        trace_dbg!(level: tracing::Level::DEBUG, $ex)
    };
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(None, None, "thinkbucks=info")]
    #[case(Some("warn"), Some("debug"), "warn")]
    #[case(Some("  "), Some("debug"), "thinkbucks=debug")]
    #[case(None, Some("thinkbucks=trace,tokio=warn"), "thinkbucks=trace,tokio=warn")]
    fn test_filter_directive(
        #[case] rust_log: Option<&str>,
        #[case] app_level: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(
            filter_directive(rust_log.map(String::from), app_level.map(String::from)),
            expected
        );
    }

    #[test]
    fn test_log_path_is_in_data_dir() {
        assert!(log_path().starts_with(get_data_dir()));
        assert!(log_path().ends_with("thinkbucks.log"));
    }
}
