//! Error types for the `folio` binary
//!
//! Aggregates the core and render errors and maps each to a process exit
//! code.

use thiserror::Error;

use folio_core::error::ConfigError;
use folio_render::RenderError;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `folio` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid YAML, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Render error (unknown page, bad reveal timing)
    pub const RENDER_ERROR: i32 = 4;

    /// HTTP host error (bind failed, metrics exporter failed)
    pub const SERVER_ERROR: i32 = 5;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `folio` operations.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Content loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Page rendering error
    #[error(transparent)]
    Render(#[from] RenderError),

    /// HTTP host error
    #[error(transparent)]
    Server(#[from] ServerError),

    /// Invalid combination of arguments
    #[error("usage error: {0}")]
    Usage(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FolioError {
    /// Returns the exit code for this error.
    ///
    /// A missing or unreadable content file is an I/O error; everything
    /// else wrong with the content is a configuration error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(ConfigError::MissingFile { .. } | ConfigError::Io { .. })
            | Self::Io(_) => ExitCode::IO_ERROR,
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Render(_) => ExitCode::RENDER_ERROR,
            Self::Server(_) => ExitCode::SERVER_ERROR,
            Self::Usage(_) => ExitCode::USAGE_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Server Errors
// ============================================================================

/// HTTP host errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Bind address could not be parsed
    #[error("invalid bind address \"{0}\"")]
    InvalidAddress(String),

    /// Listener could not be bound
    #[error("bind failed on {addr}: {source}")]
    Bind {
        /// Requested address
        addr: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Prometheus exporter could not be installed
    #[error("metrics exporter failed: {0}")]
    Metrics(String),

    /// Server loop exited with an error
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `folio` operations.
pub type Result<T> = std::result::Result<T, FolioError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::ERROR, 1);
        assert_eq!(ExitCode::CONFIG_ERROR, 2);
        assert_eq!(ExitCode::IO_ERROR, 3);
        assert_eq!(ExitCode::RENDER_ERROR, 4);
        assert_eq!(ExitCode::SERVER_ERROR, 5);
        assert_eq!(ExitCode::USAGE_ERROR, 64);
        assert_eq!(ExitCode::INTERRUPTED, 130);
        assert_eq!(ExitCode::TERMINATED, 143);
    }

    #[test]
    fn test_exit_code_mapping() {
        let cases: Vec<(FolioError, i32)> = vec![
            (
                ConfigError::MissingFile {
                    path: PathBuf::from("/x"),
                }
                .into(),
                ExitCode::IO_ERROR,
            ),
            (
                ConfigError::MissingRequired {
                    field: "title".into(),
                    location: "pages[0]".into(),
                }
                .into(),
                ExitCode::CONFIG_ERROR,
            ),
            (
                RenderError::PageNotFound {
                    slug: "x".into(),
                    suggestion: None,
                }
                .into(),
                ExitCode::RENDER_ERROR,
            ),
            (
                ServerError::InvalidAddress("x".into()).into(),
                ExitCode::SERVER_ERROR,
            ),
            (FolioError::Usage("x".into()), ExitCode::USAGE_ERROR),
            (
                std::io::Error::new(std::io::ErrorKind::NotFound, "x").into(),
                ExitCode::IO_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.exit_code(), expected, "Wrong exit code for {err}");
        }
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err: FolioError = ConfigError::MissingFile {
            path: PathBuf::from("content/site.yaml"),
        }
        .into();
        assert_eq!(err.to_string(), "file not found: content/site.yaml");
    }
}
