//! Site-wide rendering entry point.
//!
//! `Site` holds the frozen content, resolved theme and reveal policy. Every
//! call renders from scratch; disclosure state is passed in per call and
//! never stored.

use std::collections::HashSet;
use std::sync::Arc;

use folio_core::config::{Page, SiteConfig, disclosure_sites};
use tracing::debug;

use crate::disclosure::{DisclosureKey, DisclosureStates};
use crate::document;
use crate::error::RenderError;
use crate::node::Node;
use crate::page::{RenderContext, compose_page};
use crate::reveal::RevealPolicy;
use crate::theme::ThemeTokens;

/// Maximum edit distance for a "did you mean" suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// A rendered HTML page.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Full HTML document
    pub html: String,
    /// Disclosures rendered expanded
    pub expanded: usize,
}

/// Renders pages of one site.
#[derive(Debug, Clone)]
pub struct Site {
    config: Arc<SiteConfig>,
    theme: ThemeTokens,
    policy: RevealPolicy,
}

impl Site {
    /// Prepares a site for rendering.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidRevealPolicy` if the `reveal:` block
    /// would not produce a strictly increasing delay.
    pub fn new(config: Arc<SiteConfig>) -> Result<Self, RenderError> {
        let policy = RevealPolicy::from_settings(&config.reveal_settings())?;
        let theme = ThemeTokens::with_overrides(&config.theme);
        Ok(Self {
            config,
            theme,
            policy,
        })
    }

    /// The underlying content.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Resolved theme tokens.
    #[must_use]
    pub const fn theme(&self) -> &ThemeTokens {
        &self.theme
    }

    /// Page slugs in navigation order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.config.pages.iter().map(|p| p.slug.as_str())
    }

    /// Looks up a page.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::PageNotFound`, with the closest slug as a
    /// suggestion when one is close enough.
    pub fn page(&self, slug: &str) -> Result<&Page, RenderError> {
        self.config
            .page(slug)
            .ok_or_else(|| RenderError::PageNotFound {
                slug: slug.to_string(),
                suggestion: self.suggest_page(slug),
            })
    }

    /// Closest existing slug to `input`.
    #[must_use]
    pub fn suggest_page(&self, input: &str) -> Option<String> {
        self.slugs()
            .map(|s| (s, strsim::damerau_levenshtein(input, s)))
            .filter(|(_, dist)| *dist <= MAX_SUGGESTION_DISTANCE)
            .min_by_key(|(_, dist)| *dist)
            .map(|(slug, _)| slug.to_string())
    }

    /// Render context for `page`, keeping state only for mounted disclosures.
    #[must_use]
    pub fn context(&self, page: &Page, mut states: DisclosureStates) -> RenderContext {
        let live: HashSet<DisclosureKey> = disclosure_sites(page)
            .into_iter()
            .map(|site| DisclosureKey::new(site.key))
            .collect();
        let dropped = states.retain(&live);
        if dropped > 0 {
            debug!(page = %page.slug, dropped, "discarded state for unknown disclosures");
        }
        RenderContext::new(format!("/{}", page.slug))
            .with_states(states)
            .with_policy(self.policy)
    }

    /// Composes the body tree of a page.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::PageNotFound` for an unknown slug.
    pub fn compose(&self, slug: &str, states: DisclosureStates) -> Result<Node, RenderError> {
        let page = self.page(slug)?;
        let ctx = self.context(page, states);
        Ok(compose_page(page, &ctx))
    }

    /// Renders a full HTML document.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::PageNotFound` for an unknown slug.
    pub fn render_page(
        &self,
        slug: &str,
        states: DisclosureStates,
    ) -> Result<RenderedPage, RenderError> {
        let page = self.page(slug)?;
        let ctx = self.context(page, states);
        let body = compose_page(page, &ctx);
        let html = document::render_document(page, &self.config.site, &self.theme, &body);
        debug!(
            page = %page.slug,
            expanded = ctx.states.expanded_count(),
            bytes = html.len(),
            "rendered page"
        );
        Ok(RenderedPage {
            html,
            expanded: ctx.states.expanded_count(),
        })
    }

    /// Renders the visual tree of a page as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::PageNotFound` for an unknown slug, or
    /// `RenderError::Json` if serialization fails.
    pub fn render_tree_json(
        &self,
        slug: &str,
        states: DisclosureStates,
    ) -> Result<String, RenderError> {
        let tree = self.compose(slug, states)?;
        Ok(serde_json::to_string_pretty(&tree)?)
    }

    /// Renders the page listing.
    #[must_use]
    pub fn render_index(&self) -> String {
        document::render_index(&self.config, &self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = r"
site: { name: Folio }
reveal: { base_delay_ms: 120 }
theme: { teal: '#008080' }
pages:
  - slug: risk
    title: Risk Assessment
    description: d
    sections:
      - kind: prose
        heading: Intro
        paragraphs: [hello]
      - kind: risk_matrix
        heading: Risk Matrix
        buckets:
          - severity: critical
            items:
              - { title: A, plain: a, technical: ta }
              - { title: B, plain: b, technical: tb }
  - slug: about
    title: About
    description: d
    sections: []
";

    fn site() -> Site {
        let config: SiteConfig = serde_yaml::from_str(SITE).unwrap();
        Site::new(Arc::new(config)).unwrap()
    }

    #[test]
    fn test_end_to_end_toggle_one_card() {
        let site = site();

        let collapsed = site.compose("risk", DisclosureStates::new()).unwrap();
        assert_eq!(collapsed.count_text("ta"), 0);
        assert_eq!(collapsed.count_text("tb"), 0);

        let states = DisclosureStates::from_query("risk-matrix/critical/a");
        let toggled = site.compose("risk", states).unwrap();
        assert_eq!(toggled.count_text("ta"), 1);
        assert_eq!(toggled.count_text("tb"), 0);
        let titles: Vec<_> = toggled
            .find_by_class("card-title")
            .iter()
            .map(|e| e.text_content())
            .collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_unknown_keys_are_discarded() {
        let site = site();
        let page = site.page("risk").unwrap();
        let ctx = site.context(page, DisclosureStates::from_query("risk-matrix/critical/a,gone/x"));
        assert_eq!(ctx.states.expanded_count(), 1);
        assert_eq!(ctx.page_path, "/risk");
    }

    #[test]
    fn test_page_not_found_suggests() {
        let err = site().page("rsk").unwrap_err();
        assert!(matches!(
            err,
            RenderError::PageNotFound { ref suggestion, .. }
                if suggestion.as_deref() == Some("risk")
        ));
        let err = site().page("completely-different").unwrap_err();
        assert!(matches!(err, RenderError::PageNotFound { suggestion: None, .. }));
    }

    #[test]
    fn test_render_page_uses_site_settings() {
        let rendered = site()
            .render_page("risk", DisclosureStates::from_query("risk-matrix/critical/b"))
            .unwrap();
        assert_eq!(rendered.expanded, 1);
        assert!(rendered.html.contains("--teal: #008080;"));
        assert!(rendered.html.contains("--reveal-delay: 120ms"));
        assert!(rendered.html.contains("<title>Risk Assessment | Folio</title>"));
    }

    #[test]
    fn test_zero_base_delay_rejected() {
        let yaml = SITE.replace("base_delay_ms: 120", "base_delay_ms: 0");
        let config: SiteConfig = serde_yaml::from_str(&yaml).unwrap();
        assert!(matches!(
            Site::new(Arc::new(config)),
            Err(RenderError::InvalidRevealPolicy(_))
        ));
    }

    #[test]
    fn test_tree_json() {
        let json = site().render_tree_json("about", DisclosureStates::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tag"], "main");
    }

    #[test]
    fn test_slugs_in_order() {
        assert_eq!(site().slugs().collect::<Vec<_>>(), vec!["risk", "about"]);
    }
}
