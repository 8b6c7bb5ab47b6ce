//! Metrics for the HTTP host.
//!
//! Page labels come from request paths, so anything that is not a known
//! slug is bucketed as `"__unknown__"` to bound label cardinality.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

use folio_render::Site;

use crate::error::ServerError;

/// Guard to prevent double-initialization of the metrics recorder.
static METRICS_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Label used for slugs not present in the site.
pub const UNKNOWN_LABEL: &str = "__unknown__";

/// Returns `slug` if it names a page of `site`, `"__unknown__"` otherwise.
#[must_use]
pub fn sanitize_page_label<'a>(site: &Site, slug: &'a str) -> &'a str {
    if site.slugs().any(|s| s == slug) {
        slug
    } else {
        UNKNOWN_LABEL
    }
}

/// Initializes the global metrics recorder.
///
/// When `port` is `Some`, a Prometheus HTTP listener is started on
/// `127.0.0.1:<port>`. When `None`, the recorder is installed without an
/// endpoint.
///
/// # Errors
///
/// Returns `ServerError::Metrics` if the recorder or listener cannot be
/// installed (e.g. port already in use).
pub fn init_metrics(port: Option<u16>) -> Result<(), ServerError> {
    if METRICS_INITIALIZED.swap(true, Ordering::SeqCst) {
        tracing::debug!("metrics already initialized, skipping");
        return Ok(());
    }
    port.map_or_else(
        || PrometheusBuilder::new().install_recorder().map(|_| ()),
        |p| {
            PrometheusBuilder::new()
                .with_http_listener(([127, 0, 0, 1], p))
                .install()
        },
    )
    .map_err(|e| ServerError::Metrics(e.to_string()))?;

    describe_metrics();
    Ok(())
}

fn describe_metrics() {
    describe_counter!("folio_page_renders_total", "Pages rendered, by page");
    describe_counter!(
        "folio_page_not_found_total",
        "Requests for slugs with no page"
    );
    describe_histogram!(
        "folio_render_duration_ms",
        "Page render duration in milliseconds"
    );
    describe_histogram!(
        "folio_disclosures_open",
        "Disclosures rendered expanded per page view"
    );
}

/// Records one rendered page view.
pub fn record_page_render(site: &Site, slug: &str, duration: Duration, expanded: usize) {
    let label = sanitize_page_label(site, slug).to_owned();
    counter!("folio_page_renders_total", "page" => label.clone()).increment(1);
    histogram!("folio_render_duration_ms", "page" => label)
        .record(duration.as_secs_f64() * 1000.0);
    #[allow(clippy::cast_precision_loss)]
    let expanded = expanded as f64;
    histogram!("folio_disclosures_open").record(expanded);
}

/// Records a request for an unknown slug.
pub fn record_not_found() {
    counter!("folio_page_not_found_total").increment(1);
}
