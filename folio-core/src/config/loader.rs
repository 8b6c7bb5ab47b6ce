//! Content loader
//!
//! Loading pipeline:
//! 1. Size check against `ContentLimits::max_config_size`
//! 2. YAML parsing and deserialization to `SiteConfig`
//! 3. Validation (all issues collected)
//! 4. Freeze with `Arc`
//!
//! The result is read-only input resolved before the first render.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::config::schema::SiteConfig;
use crate::config::validation::Validator;
use crate::error::{ConfigError, ValidationIssue};

// ============================================================================
// Public API
// ============================================================================

/// Options for the content loader.
#[derive(Debug, Clone, Default)]
pub struct LoaderOptions {
    /// Size limits for the content file.
    pub limits: ContentLimits,

    /// Treat warnings as errors.
    pub strict: bool,
}

/// Limits on content size.
#[derive(Debug, Clone)]
pub struct ContentLimits {
    /// Maximum content file size in bytes.
    pub max_config_size: usize,

    /// Maximum number of pages.
    pub max_pages: usize,

    /// Maximum number of top-level sections per page.
    pub max_sections: usize,

    /// Maximum number of items in a single risk bucket.
    pub max_items_per_bucket: usize,
}

impl Default for ContentLimits {
    fn default() -> Self {
        Self {
            max_config_size: env_or("FOLIO_MAX_CONFIG_SIZE", 4 * 1024 * 1024),
            max_pages: env_or("FOLIO_MAX_PAGES", 200),
            max_sections: env_or("FOLIO_MAX_SECTIONS", 50),
            max_items_per_bucket: env_or("FOLIO_MAX_ITEMS_PER_BUCKET", 100),
        }
    }
}

/// Result of loading a content file.
#[derive(Debug)]
pub struct LoadResult {
    /// The loaded and validated site.
    pub config: Arc<SiteConfig>,

    /// Warnings found during validation.
    pub warnings: Vec<ValidationIssue>,
}

/// Content loader.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: LoaderOptions,
}

impl ConfigLoader {
    /// Creates a new loader with the given options.
    #[must_use]
    pub const fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Creates a new loader with default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(LoaderOptions::default())
    }

    /// Loads, validates and freezes a content file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the file does not exist or cannot be read
    /// - the file exceeds the size limit
    /// - the YAML is malformed or a required field is missing
    /// - validation finds any error (or any warning in strict mode)
    pub fn load(&self, path: &Path) -> Result<LoadResult, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        self.load_str(&content, path)
    }

    /// Loads content from a string. `origin` is used in error messages.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigLoader::load`], minus file access.
    pub fn load_str(&self, content: &str, origin: &Path) -> Result<LoadResult, ConfigError> {
        let limit = self.options.limits.max_config_size;
        if content.len() > limit {
            return Err(ConfigError::TooLarge {
                path: origin.to_path_buf(),
                size: content.len(),
                limit,
            });
        }

        let config: SiteConfig =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                path: origin.to_path_buf(),
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;

        let mut result = Validator::new().validate(&config, &self.options.limits);
        if self.options.strict {
            result.promote_warnings();
        }
        if result.has_errors() {
            return Err(ConfigError::ValidationError {
                path: origin.display().to_string(),
                errors: result.errors,
            });
        }

        debug!(
            origin = %origin.display(),
            pages = config.pages.len(),
            warnings = result.warnings.len(),
            "content loaded"
        );

        Ok(LoadResult {
            config: Arc::new(config),
            warnings: result.warnings,
        })
    }
}

/// Reads a numeric limit from the environment, falling back to `default`.
fn env_or(var: &str, default: usize) -> usize {
    std::env::var(var)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
