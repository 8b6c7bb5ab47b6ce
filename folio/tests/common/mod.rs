//! Shared integration-test harness for running the `folio` binary.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Path to the compiled binary.
pub const BIN: &str = env!("CARGO_BIN_EXE_folio");

/// Runs `folio` with `args` to completion, quiet and uncolored.
#[allow(clippy::missing_panics_doc)]
pub fn spawn_command(args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .env_remove("FOLIO_CONFIG")
        .env_remove("FOLIO_LOG_LEVEL")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run folio")
}

/// Absolute path to a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Absolute path to a fixture as a string argument.
#[allow(clippy::missing_panics_doc)]
pub fn fixture_arg(name: &str) -> String {
    fixture_path(name)
        .to_str()
        .expect("non-UTF-8 fixture path")
        .to_string()
}

/// Stdout as a lossy string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as a lossy string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
