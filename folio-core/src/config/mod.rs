//! Site content configuration
//!
//! Schema, loading, validation and content identity for the YAML file
//! that drives every page.

pub mod identity;
pub mod loader;
pub mod schema;
pub mod tokens;
pub mod validation;

pub use identity::{DisclosureSite, disclosure_sites};
pub use loader::{ConfigLoader, ContentLimits, LoadResult, LoaderOptions};
pub use schema::*;
pub use tokens::{DEFAULT_TOKENS, is_default_token};
pub use validation::{ValidationResult, Validator};
