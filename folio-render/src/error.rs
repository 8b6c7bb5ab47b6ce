//! Error types for page rendering.
//!
//! Rendering itself is total over validated content; these errors come from
//! looking things up (unknown pages) and from settings that would break the
//! reveal ordering.

use thiserror::Error;

/// Errors that can occur while rendering pages.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No page with the requested slug.
    #[error("page not found: {slug}{}", suggestion.as_ref().map_or_else(String::new, |s| format!(" (did you mean '{s}'?)")))]
    PageNotFound {
        /// Requested slug
        slug: String,
        /// Closest existing slug, if any is close enough
        suggestion: Option<String>,
    },

    /// Reveal timing would not produce a strictly increasing delay.
    #[error("invalid reveal policy: {0}")]
    InvalidRevealPolicy(String),

    /// JSON serialization of the visual tree failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
