//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod build;
pub mod completions;
pub mod render;
pub mod serve;
pub mod validate;
pub mod version;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use folio_core::config::{ConfigLoader, ContentLimits, LoaderOptions};
use folio_render::Site;

use crate::cli::args::{Cli, Commands, ContentArgs};
use crate::error::FolioError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli, cancel: CancellationToken) -> Result<(), FolioError> {
    let quiet = cli.quiet;
    match cli.command {
        Commands::Build(args) => build::run(&args, quiet),
        Commands::Validate(args) => validate::run(&args, quiet),
        Commands::Render(args) => render::run(&args),
        Commands::Serve(args) => serve::run(&args, cancel).await,
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}

/// Builds loader options from the command line and `FOLIO_MAX_*` limits.
#[must_use]
pub fn loader_options(content: &ContentArgs) -> LoaderOptions {
    LoaderOptions {
        limits: ContentLimits::default(),
        strict: content.strict,
    }
}

/// Loads and validates the content file, logging any warnings.
///
/// # Errors
///
/// Returns a config error if the file is missing, malformed or invalid,
/// or a render error if the reveal timing is unusable.
pub fn load_site(content: &ContentArgs) -> Result<Site, FolioError> {
    tracing::info!(config = %content.config.display(), "loading content");

    let loader = ConfigLoader::new(loader_options(content));
    let load_result = loader.load(&content.config)?;

    for warning in &load_result.warnings {
        tracing::warn!(location = %warning.path, "{}", warning.message);
    }

    let site = Site::new(Arc::clone(&load_result.config))?;
    tracing::debug!(pages = site.config().pages.len(), "content loaded");
    Ok(site)
}
