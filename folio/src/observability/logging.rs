//! Logging initialization.
//!
//! Human-readable or JSON logs on stderr, with verbosity from `-v` flags
//! and an override via `FOLIO_LOG_LEVEL`.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::cli::args::ColorChoice;

/// Environment variable that overrides the `-v` verbosity.
pub const LOG_LEVEL_ENV: &str = "FOLIO_LOG_LEVEL";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable format with optional ANSI colors.
    #[default]
    Human,
    /// Newline-delimited JSON.
    Json,
}

/// Crates whose events `-v` and `-vv` turn up.
const FOLIO_TARGETS: &[&str] = &["folio", "folio_core", "folio_render"];

/// Maps a verbosity level to a tracing level name.
///
/// - 0 → `"warn"`
/// - 1 → `"info"`
/// - 2 → `"debug"`
/// - 3+ → `"trace"` (saturates)
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds the filter used when `FOLIO_LOG_LEVEL` is unset.
///
/// `-v` and `-vv` raise only the folio crates; axum and hyper stay at
/// `warn` so per-request connection events do not bury render logs.
/// `-vvv` traces everything.
#[must_use]
pub fn default_directive(verbosity: u8) -> String {
    let level = verbosity_to_directive(verbosity);
    if matches!(verbosity, 1 | 2) {
        let scoped: Vec<String> = FOLIO_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect();
        format!("warn,{}", scoped.join(","))
    } else {
        level.to_string()
    }
}

/// Initializes the global tracing subscriber.
///
/// `FOLIO_LOG_LEVEL`, when set, takes precedence over `verbosity`. Targets
/// are shown from `-vv` up, where events from the three crates interleave.
/// Uses `try_init()`, so repeated calls are ignored.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let show_target = verbosity >= 2;

    let use_ansi = match color {
        ColorChoice::Auto => {
            std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    match format {
        LogFormat::Human => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(use_ansi)
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogFormat::Json => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}
