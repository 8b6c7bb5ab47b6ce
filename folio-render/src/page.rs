//! Page assembly.
//!
//! A page is a header followed by its sections in content order. Section
//! `i` carries `reveal(i)`; the header fades in on its own with no delay.

use chrono::NaiveDate;
use folio_core::config::Page;

use crate::components::render_section;
use crate::disclosure::{
    DEFAULT_LABEL, DisclosureKey, DisclosureStates, OPEN_PARAM, anchor_id, render_disclosure,
};
use crate::node::{Node, el};
use crate::reveal::RevealPolicy;

/// Everything a component needs besides its own content.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Path of the page being rendered, e.g. `/about`
    pub page_path: String,
    /// Expanded disclosures on this page
    pub states: DisclosureStates,
    /// Section reveal timing
    pub policy: RevealPolicy,
    /// Label on every disclosure control
    pub detail_label: String,
}

impl RenderContext {
    /// Context for `page_path` with everything collapsed.
    #[must_use]
    pub fn new(page_path: impl Into<String>) -> Self {
        Self {
            page_path: page_path.into(),
            states: DisclosureStates::new(),
            policy: RevealPolicy::default(),
            detail_label: DEFAULT_LABEL.to_string(),
        }
    }

    /// Replaces the disclosure states.
    #[must_use]
    pub fn with_states(mut self, states: DisclosureStates) -> Self {
        self.states = states;
        self
    }

    /// Replaces the reveal policy.
    #[must_use]
    pub fn with_policy(mut self, policy: RevealPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Link that flips `key` and leaves every other disclosure alone.
    #[must_use]
    pub fn toggle_href(&self, key: &DisclosureKey) -> String {
        let next = self.states.with_toggled(key);
        let fragment = anchor_id(key);
        match next.to_query() {
            Some(open) => format!("{}?{OPEN_PARAM}={open}#{fragment}", self.page_path),
            None => format!("{}#{fragment}", self.page_path),
        }
    }

    /// Renders the disclosure for `key` in its current state.
    pub fn disclosure(&self, key: impl Into<DisclosureKey>, child: impl FnOnce() -> Node) -> Node {
        let key = key.into();
        render_disclosure(
            &key,
            &self.detail_label,
            self.states.get(&key),
            &self.toggle_href(&key),
            child,
        )
    }
}

/// Composes the body tree of a page.
#[must_use]
pub fn compose_page(page: &Page, ctx: &RenderContext) -> Node {
    let mut main = el("main").class("page").child(render_header(page, ctx));

    for (index, section) in page.sections.iter().enumerate() {
        let spec = ctx
            .policy
            .reveal(u32::try_from(index).unwrap_or(u32::MAX));
        let body = render_section(section, index, ctx);
        main = main.child(
            el("section")
                .class("reveal")
                .class(format!("section-{}", section.kind().replace('_', "-")))
                .attr("id", section.slug(index))
                .attr("data-reveal-index", index.to_string())
                .attr("style", spec.css_vars())
                .children(body),
        );
    }

    main.into()
}

fn render_header(page: &Page, ctx: &RenderContext) -> Node {
    let mut header = el("header")
        .class("page-header")
        .class("reveal")
        .attr("style", ctx.policy.fade_in_up().css_vars());

    if let Some(link) = &page.back_link {
        header = header.child(
            el("a")
                .class("back-link")
                .attr("href", &link.href)
                .text(format!("← {}", link.label)),
        );
    }

    header = header.child(el("h1").text(&page.title));

    if let Some(meta) = byline(page.byline.as_deref(), page.published) {
        header = header.child(el("p").class("byline").text(meta));
    }

    header
        .child_opt(
            page.subtitle
                .as_ref()
                .map(|s| el("p").class("subtitle").text(s)),
        )
        .into()
}

/// "Opinion piece · January 2026"
fn byline(byline: Option<&str>, published: Option<NaiveDate>) -> Option<String> {
    let date = published.map(|d| d.format("%B %Y").to_string());
    match (byline, date) {
        (Some(b), Some(d)) => Some(format!("{b} · {d}")),
        (Some(b), None) => Some(b.to_string()),
        (None, Some(d)) => Some(d),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(yaml: &str) -> Page {
        serde_yaml::from_str(yaml).unwrap()
    }

    const PAGE: &str = r"
slug: risk
title: Risk Assessment
description: d
byline: Opinion piece
published: 2026-01-10
subtitle: An independent look.
back_link: { label: Back to Agents, href: /agents }
sections:
  - kind: prose
    heading: What Is It?
    paragraphs: [one, two]
  - kind: prose
    heading: Why It Matters
    paragraphs: [three]
  - kind: call_to_action
    body: Get in touch
    links: [{ label: Contact, href: /contact }]
";

    #[test]
    fn test_header() {
        let node = compose_page(&page(PAGE), &RenderContext::new("/risk"));
        let headers = node.find_by_class("page-header");
        let header = headers[0];
        let text = header.text_content();
        assert!(text.contains("← Back to Agents"));
        assert!(text.contains("Risk Assessment"));
        assert!(text.contains("Opinion piece · January 2026"));
        assert!(text.contains("An independent look."));
        assert!(header.get_attr("style").unwrap().contains("--reveal-delay: 0ms"));
    }

    #[test]
    fn test_sections_in_order_with_increasing_delay() {
        let node = compose_page(&page(PAGE), &RenderContext::new("/risk"));
        let sections = node.find_all(&|e| e.tag == "section");
        assert_eq!(sections.len(), 3);

        let ids: Vec<_> = sections.iter().filter_map(|s| s.get_attr("id")).collect();
        assert_eq!(ids, vec!["what-is-it", "why-it-matters", "call-to-action-2"]);

        for (i, section) in sections.iter().enumerate() {
            assert_eq!(section.get_attr("data-reveal-index"), Some(i.to_string().as_str()));
            let style = section.get_attr("style").unwrap();
            assert!(style.contains(&format!("--reveal-delay: {}ms", i * 100)), "{style}");
        }
    }

    #[test]
    fn test_custom_policy() {
        let policy = RevealPolicy::new(
            std::time::Duration::from_millis(250),
            std::time::Duration::from_millis(500),
            20,
        )
        .unwrap();
        let node = compose_page(&page(PAGE), &RenderContext::new("/risk").with_policy(policy));
        let sections = node.find_all(&|e| e.tag == "section");
        assert!(sections[2].get_attr("style").unwrap().contains("--reveal-delay: 500ms"));
    }

    #[test]
    fn test_toggle_href_flips_only_own_key() {
        let ctx = RenderContext::new("/risk")
            .with_states(DisclosureStates::from_keys(["a/x"]));
        assert_eq!(
            ctx.toggle_href(&DisclosureKey::new("a/y")),
            "/risk?open=a/x,a/y#detail-a/y"
        );
        assert_eq!(
            ctx.toggle_href(&DisclosureKey::new("a/x")),
            "/risk#detail-a/x"
        );
    }

    #[test]
    fn test_byline_variants() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1);
        assert_eq!(byline(None, date).as_deref(), Some("March 2025"));
        assert_eq!(byline(Some("Essay"), None).as_deref(), Some("Essay"));
        assert_eq!(byline(None, None), None);
    }
}
