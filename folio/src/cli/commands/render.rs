//! Single-page render command
//!
//! Prints one page to stdout, as an HTML document or as the visual tree in
//! JSON. `--open` expands disclosures by key.

use folio_core::config::{Page, disclosure_sites};
use folio_render::DisclosureStates;

use crate::cli::args::{RenderArgs, RenderFormat};
use crate::cli::commands::load_site;
use crate::error::FolioError;

/// Render one page to stdout.
///
/// # Errors
///
/// Returns a config error if the content is invalid, a render error if the
/// slug does not exist, or a usage error if an `--open` key names no
/// disclosure on the page.
pub fn run(args: &RenderArgs) -> Result<(), FolioError> {
    let site = load_site(&args.content)?;
    let page = site.page(&args.slug)?;
    check_open_keys(&args.slug, &live_keys(page), &args.open)?;

    let states = DisclosureStates::from_keys(args.open.iter().map(String::as_str));
    let output = match args.format {
        RenderFormat::Html => site.render_page(&args.slug, states)?.html,
        RenderFormat::Json => site.render_tree_json(&args.slug, states)?,
    };
    println!("{output}");
    Ok(())
}

fn live_keys(page: &Page) -> Vec<String> {
    disclosure_sites(page).into_iter().map(|s| s.key).collect()
}

/// Rejects requested keys that are not on the page. The HTTP host drops
/// them instead.
fn check_open_keys(slug: &str, live: &[String], open: &[String]) -> Result<(), FolioError> {
    let Some(unknown) = open.iter().find(|key| !live.contains(key)) else {
        return Ok(());
    };
    let known = if live.is_empty() {
        "none".to_string()
    } else {
        live.join(", ")
    };
    Err(FolioError::Usage(format!(
        "unknown disclosure key '{unknown}' on page '{slug}' (known keys: {known})"
    )))
}
