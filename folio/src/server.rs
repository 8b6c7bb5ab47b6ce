//! HTTP rendering host
//!
//! Routes:
//! - `GET /` page listing
//! - `GET /{slug}` a page; `?open=k1,k2` expands those disclosures
//! - `GET /healthz` liveness
//!
//! Every request renders from the frozen site. Disclosure state travels in
//! the URL, so nothing is shared between requests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use folio_render::escape::escape_text;
use folio_render::{DisclosureStates, RenderError, Site};

use crate::error::ServerError;
use crate::observability::metrics;

/// Query string accepted by page routes.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Comma-separated expanded disclosure keys
    #[serde(default)]
    pub open: Option<String>,
}

/// Builds the router over a frozen site.
pub fn build_router(site: Arc<Site>) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/healthz", get(handle_health))
        .route("/{slug}", get(handle_page))
        .with_state(site)
}

/// Binds `addr` and serves until `cancel` fires.
///
/// Returns the server task and the bound address (useful when binding to
/// port 0 in tests).
///
/// # Errors
///
/// Returns `ServerError::Bind` if the listener cannot bind.
pub async fn bind(
    site: Arc<Site>,
    addr: &str,
    cancel: CancellationToken,
) -> Result<(JoinHandle<Result<(), ServerError>>, SocketAddr), ServerError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })?;
    let bound = listener.local_addr()?;

    let router = build_router(site);
    let handle = tokio::spawn(async move {
        info!(%bound, "HTTP host started");
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                cancel.cancelled().await;
            })
            .await?;
        debug!("HTTP host shut down");
        Ok::<(), ServerError>(())
    });

    Ok((handle, bound))
}

/// Normalizes `[host:]port` to `host:port`.
///
/// # Errors
///
/// Returns `ServerError::InvalidAddress` if the result is not a socket
/// address.
pub fn parse_bind_addr(input: &str) -> Result<String, ServerError> {
    let addr = if input.starts_with(':') {
        format!("127.0.0.1{input}")
    } else if input.parse::<u16>().is_ok() {
        format!("127.0.0.1:{input}")
    } else {
        input.to_string()
    };
    addr.parse::<SocketAddr>()
        .map_err(|_| ServerError::InvalidAddress(input.to_string()))?;
    Ok(addr)
}

// ============================================================================
// Handlers
// ============================================================================

async fn handle_index(State(site): State<Arc<Site>>) -> Html<String> {
    Html(site.render_index())
}

async fn handle_health() -> &'static str {
    "ok"
}

async fn handle_page(
    State(site): State<Arc<Site>>,
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    let states = query
        .open
        .as_deref()
        .map(DisclosureStates::from_query)
        .unwrap_or_default();

    let started = Instant::now();
    match site.render_page(&slug, states) {
        Ok(page) => {
            metrics::record_page_render(&site, &slug, started.elapsed(), page.expanded);
            Html(page.html).into_response()
        }
        Err(err @ RenderError::PageNotFound { .. }) => {
            metrics::record_not_found();
            debug!(%slug, "page not found");
            (StatusCode::NOT_FOUND, Html(not_found_body(&err))).into_response()
        }
        Err(err) => {
            error!(%slug, error = %err, "render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "render failed").into_response()
        }
    }
}

fn not_found_body(err: &RenderError) -> String {
    let mut body = format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>Not Found</title></head><body><h1>Not Found</h1><p>{}</p>",
        escape_text(&err.to_string())
    );
    if let RenderError::PageNotFound {
        suggestion: Some(s),
        ..
    } = err
    {
        body.push_str(&format!("<p><a href=\"/{s}\">/{s}</a></p>"));
    }
    body.push_str("<p><a href=\"/\">All pages</a></p></body></html>");
    body
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use folio_core::config::SiteConfig;
    use tower::util::ServiceExt;

    const SITE: &str = r#"{
        "site": { "name": "Folio" },
        "pages": [{
            "slug": "risk",
            "title": "Risk",
            "description": "d",
            "sections": [{
                "kind": "risk_matrix",
                "heading": "Risk Matrix",
                "buckets": [{
                    "severity": "high",
                    "items": [
                        { "title": "A", "plain": "a", "technical": "detail-of-a" },
                        { "title": "B", "plain": "b", "technical": "detail-of-b" }
                    ]
                }]
            }]
        }]
    }"#;

    fn router() -> Router {
        let config: SiteConfig = serde_json::from_str(SITE).unwrap();
        build_router(Arc::new(Site::new(Arc::new(config)).unwrap()))
    }

    async fn get_body(uri: &str) -> (StatusCode, String) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = router().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn parse_bind_addr_colon_port() {
        assert_eq!(parse_bind_addr(":8080").unwrap(), "127.0.0.1:8080");
    }

    #[test]
    fn parse_bind_addr_port_only() {
        assert_eq!(parse_bind_addr("8080").unwrap(), "127.0.0.1:8080");
    }

    #[test]
    fn parse_bind_addr_full() {
        assert_eq!(parse_bind_addr("0.0.0.0:3000").unwrap(), "0.0.0.0:3000");
    }

    #[test]
    fn parse_bind_addr_invalid() {
        assert!(parse_bind_addr("not-an-address").is_err());
    }

    #[tokio::test]
    async fn healthz_returns_ok() {
        let (status, body) = get_body("/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn index_lists_pages() {
        let (status, body) = get_body("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"href="/risk""#));
    }

    #[tokio::test]
    async fn page_renders_collapsed_by_default() {
        let (status, body) = get_body("/risk").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("detail-of-a"));
        assert!(!body.contains("detail-of-b"));
        assert!(body.contains("href=\"/risk?open=risk-matrix/high/a#detail-risk-matrix/high/a\""));
    }

    #[tokio::test]
    async fn open_query_expands_only_that_card() {
        let (status, body) = get_body("/risk?open=risk-matrix/high/a").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches("detail-of-a").count(), 1);
        assert!(!body.contains("detail-of-b"));
        // Collapsing A from the expanded page drops the query entirely.
        assert!(body.contains("href=\"/risk#detail-risk-matrix/high/a\""));
    }

    #[tokio::test]
    async fn unknown_open_keys_are_ignored() {
        let (status, body) = get_body("/risk?open=nope,risk-matrix/high/b").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches("detail-of-b").count(), 1);
    }

    #[tokio::test]
    async fn unknown_slug_returns_404_with_suggestion() {
        let (status, body) = get_body("/rsk").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("did you mean"));
        assert!(body.contains("href=\"/risk\""));
    }
}
