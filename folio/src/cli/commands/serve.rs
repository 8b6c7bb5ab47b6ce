//! HTTP host command
//!
//! Loads the content once, freezes it, and serves pages until cancelled.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::cli::args::ServeArgs;
use crate::cli::commands::load_site;
use crate::error::FolioError;
use crate::server;

/// Serve the site over HTTP.
///
/// # Errors
///
/// Returns a config error if the content is invalid, or a server error if
/// the listener or metrics exporter cannot be started.
pub async fn run(args: &ServeArgs, cancel: CancellationToken) -> Result<(), FolioError> {
    if let Some(port) = args.metrics_port {
        crate::observability::init_metrics(Some(port))?;
        tracing::info!(port, "Prometheus metrics endpoint started");
    }

    let site = Arc::new(load_site(&args.content)?);
    let addr = server::parse_bind_addr(&args.bind)?;
    let (handle, bound) = server::bind(site, &addr, cancel).await?;
    tracing::info!(%bound, "serving pages");

    handle.await.map_err(|e| FolioError::Io(std::io::Error::other(e)))??;
    Ok(())
}
