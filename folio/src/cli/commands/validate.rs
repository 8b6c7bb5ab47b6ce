//! Content validation command
//!
//! Loads and validates the content file without rendering. Every issue is
//! reported in one run.

use folio_core::config::{ConfigLoader, disclosure_sites};
use folio_core::error::{ConfigError, ValidationIssue};
use serde_json::json;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::cli::commands::loader_options;
use crate::error::FolioError;

/// Validate the content file.
///
/// # Errors
///
/// Returns an I/O error if the file is missing, or a config error if it
/// fails to parse or validate.
pub fn run(args: &ValidateArgs, quiet: bool) -> Result<(), FolioError> {
    let path = &args.content.config;
    tracing::info!(file = %path.display(), "validating content");

    let loader = ConfigLoader::new(loader_options(&args.content));
    match loader.load(path) {
        Ok(result) => {
            for warning in &result.warnings {
                tracing::warn!(location = %warning.path, "{}", warning.message);
            }
            let disclosures: usize = result
                .config
                .pages
                .iter()
                .map(|p| disclosure_sites(p).len())
                .sum();

            match args.format {
                OutputFormat::Human if !quiet => {
                    for warning in &result.warnings {
                        println!("{warning}");
                    }
                    println!(
                        "{}: ok ({} pages, {disclosures} disclosures, {} warnings)",
                        path.display(),
                        result.config.pages.len(),
                        result.warnings.len()
                    );
                }
                OutputFormat::Human => {}
                OutputFormat::Json => {
                    let out = json!({
                        "file": path.display().to_string(),
                        "valid": true,
                        "pages": result.config.pages.len(),
                        "disclosures": disclosures,
                        "errors": [],
                        "warnings": issues_json(&result.warnings),
                    });
                    println!("{}", serde_json::to_string_pretty(&out)?);
                }
            }
            tracing::info!(file = %path.display(), "content valid");
            Ok(())
        }
        Err(err) => {
            match (&err, args.format) {
                (ConfigError::ValidationError { errors, .. }, OutputFormat::Json) => {
                    let out = json!({
                        "file": path.display().to_string(),
                        "valid": false,
                        "errors": issues_json(errors),
                    });
                    println!("{}", serde_json::to_string_pretty(&out)?);
                }
                (ConfigError::ValidationError { errors, .. }, OutputFormat::Human) if !quiet => {
                    for issue in errors {
                        eprintln!("{issue}");
                    }
                }
                _ => {}
            }
            Err(err.into())
        }
    }
}

fn issues_json(issues: &[ValidationIssue]) -> serde_json::Value {
    issues
        .iter()
        .map(|i| json!({ "path": i.path, "message": i.message }))
        .collect()
}
