//! Core error types for `Folio`
//!
//! Content is static and reviewed before deployment, so the only failures
//! this crate knows about are configuration errors. They surface at load
//! time and are never swallowed at render time.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed
    #[error("parse error in {path}{}: {message}", line.map_or_else(String::new, |l| format!(" (line {l})")))]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Configuration validation failed
    #[error("validation failed for {path}: {}", summarize(errors))]
    ValidationError {
        /// Path to the configuration file
        path: String,
        /// List of validation issues found
        errors: Vec<ValidationIssue>,
    },

    /// Referenced configuration file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Required field is missing or empty
    #[error("missing required field '{field}' at {location}")]
    MissingRequired {
        /// Name of the missing field
        field: String,
        /// Location in the content (e.g., "pages[1].sections[2].buckets[0]")
        location: String,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },

    /// Configuration file exceeds the size limit
    #[error("{path} is {size} bytes (limit: {limit})")]
    TooLarge {
        /// Path to the configuration file
        path: PathBuf,
        /// Actual size in bytes
        size: usize,
        /// Configured limit in bytes
        limit: usize,
    },

    /// I/O error while reading configuration
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

fn summarize(errors: &[ValidationIssue]) -> String {
    match errors {
        [] => "no issues recorded".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{first} (and {} more)", rest.len()),
    }
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single validation issue found during content validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Path to the problematic field (e.g., "pages[0].sections[2].heading")
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Level of the issue
    pub level: IssueLevel,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.level {
            IssueLevel::Error => "error",
            IssueLevel::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Level of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueLevel {
    /// Content cannot be rendered
    Error,
    /// Suspicious content that still renders
    Warning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_issue_display() {
        let issue = ValidationIssue {
            path: "pages[0].sections[1].buckets[0].items[2].title".to_string(),
            message: "title is empty".to_string(),
            level: IssueLevel::Error,
        };
        assert_eq!(
            issue.to_string(),
            "error: title is empty at pages[0].sections[1].buckets[0].items[2].title"
        );
    }

    #[test]
    fn test_validation_issue_warning_display() {
        let issue = ValidationIssue {
            path: "pages[0].title".to_string(),
            message: "title is unusually long".to_string(),
            level: IssueLevel::Warning,
        };
        assert_eq!(
            issue.to_string(),
            "warning: title is unusually long at pages[0].title"
        );
    }

    #[test]
    fn test_parse_error_display_with_line() {
        let err = ConfigError::ParseError {
            path: PathBuf::from("site.yaml"),
            line: Some(42),
            message: "unexpected token".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("site.yaml"));
        assert!(msg.contains("(line 42)"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn test_parse_error_display_without_line() {
        let err = ConfigError::ParseError {
            path: PathBuf::from("site.yaml"),
            line: None,
            message: "bad".to_string(),
        };
        assert!(!err.to_string().contains("line"));
    }

    #[test]
    fn test_validation_error_summarizes_issues() {
        let issue = ValidationIssue {
            path: "pages".to_string(),
            message: "no pages defined".to_string(),
            level: IssueLevel::Error,
        };
        let err = ConfigError::ValidationError {
            path: "site.yaml".to_string(),
            errors: vec![issue.clone(), issue],
        };
        let msg = err.to_string();
        assert!(msg.contains("no pages defined"));
        assert!(msg.contains("and 1 more"));
    }

    #[test]
    fn test_missing_required_display() {
        let err = ConfigError::MissingRequired {
            field: "title".to_string(),
            location: "risk item".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "missing required field 'title' at risk item"
        );
    }
}
