//! Static site build
//!
//! Renders every page with all disclosures collapsed to
//! `<out>/<slug>/index.html`, plus the page listing at `<out>/index.html`.

use std::path::{Path, PathBuf};

use folio_render::{DisclosureStates, Site};

use crate::cli::args::BuildArgs;
use crate::cli::commands::load_site;
use crate::error::FolioError;

/// Render the site to static files.
///
/// # Errors
///
/// Returns a config error if the content is invalid, or an I/O error if
/// the output directory cannot be written.
pub fn run(args: &BuildArgs, quiet: bool) -> Result<(), FolioError> {
    let site = load_site(&args.content)?;
    let written = write_site(&site, &args.out)?;

    if !quiet {
        println!("built {} pages into {}", written.len(), args.out.display());
    }
    Ok(())
}

/// Writes every page and the listing under `out`.
///
/// Returns the page files written, in navigation order.
///
/// # Errors
///
/// Returns an I/O error if a directory or file cannot be written.
pub fn write_site(site: &Site, out: &Path) -> Result<Vec<PathBuf>, FolioError> {
    std::fs::create_dir_all(out)?;

    let mut written = Vec::new();
    for slug in site.slugs() {
        let page = site.render_page(slug, DisclosureStates::new())?;
        let dir = out.join(slug);
        std::fs::create_dir_all(&dir)?;
        let path = dir.join("index.html");
        std::fs::write(&path, page.html)?;
        tracing::debug!(path = %path.display(), "wrote page");
        written.push(path);
    }

    std::fs::write(out.join("index.html"), site.render_index())?;
    tracing::info!(pages = written.len(), out = %out.display(), "build complete");
    Ok(written)
}
