//! Section components.
//!
//! One renderer per section kind. Renderers are pure: content plus
//! [`RenderContext`] in, nodes out. Disclosure keys come from
//! `folio_core::config::identity` so they always agree with the validator.

pub mod cards;
pub mod risk;
pub mod text;

use folio_core::config::{Detail, Link, Section};

use crate::node::{Element, Node, el};
use crate::page::RenderContext;
use crate::theme::var;

/// Renders the contents of the top-level section at `index`.
///
/// The caller wraps the result in the `<section>` that carries the reveal.
#[must_use]
pub fn render_section(section: &Section, index: usize, ctx: &RenderContext) -> Vec<Node> {
    let slug = section.slug(index);
    match section {
        Section::Prose(s) => text::render_prose(s),
        Section::Callout(s) => cards::render_callout(s, &slug, ctx),
        Section::RiskMatrix(s) => risk::render_risk_matrix(s, &slug, ctx),
        Section::CardGrid(s) => cards::render_card_grid(s, &slug, ctx),
        Section::Phases(s) => cards::render_phases(s, &slug, ctx),
        Section::Quote(s) => cards::render_quote(s, &slug, ctx),
        Section::Sources(s) => text::render_sources(s),
        Section::CallToAction(s) => text::render_call_to_action(s),
    }
}

// ============================================================================
// Shared Pieces
// ============================================================================

pub(crate) fn section_heading(heading: &str) -> Node {
    el("h2").class("section-heading").text(heading).into()
}

pub(crate) fn paragraph(body: &str) -> Node {
    el("p").text(body).into()
}

pub(crate) fn bullet_list(items: &[String]) -> Element {
    el("ul").children(items.iter().map(|i| el("li").text(i).into()))
}

/// Inline style pointing `--accent` at a theme token.
pub(crate) fn accent_style(token: &str) -> String {
    format!("--accent: {};", var(token))
}

/// A bordered card, accented with `token`.
pub(crate) fn card_shell(token: &str) -> Element {
    el("div").class("card").attr("style", accent_style(token))
}

/// Body of a disclosure.
pub(crate) fn render_detail(detail: &Detail) -> Node {
    match detail {
        Detail::Text(text) => paragraph(text),
        Detail::List { intro, items } => el("div")
            .child_opt(intro.as_deref().map(paragraph))
            .child(bullet_list(items))
            .into(),
    }
}

pub(crate) fn render_link(link: &Link) -> Node {
    let mut a = el("a")
        .class("button")
        .attr("href", &link.href)
        .text(&link.label);
    if link.primary {
        a = a.class("primary");
    }
    if link.is_external() {
        a = a
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer");
    }
    a.into()
}

pub(crate) fn render_links(links: &[Link]) -> Option<Node> {
    if links.is_empty() {
        return None;
    }
    Some(
        el("div")
            .class("links")
            .children(links.iter().map(render_link))
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_detail_text() {
        let node = render_detail(&Detail::Text("Binds 0.0.0.0".to_string()));
        assert_eq!(node.render_html(), "<p>Binds 0.0.0.0</p>");
    }

    #[test]
    fn test_render_detail_list() {
        let node = render_detail(&Detail::List {
            intro: Some("Vectors:".to_string()),
            items: vec!["exfiltration".to_string(), "injection".to_string()],
        });
        assert_eq!(
            node.render_html(),
            "<div><p>Vectors:</p><ul><li>exfiltration</li><li>injection</li></ul></div>"
        );
    }

    #[test]
    fn test_external_link_opens_new_tab() {
        let link = Link {
            label: "OWASP".to_string(),
            href: "https://owasp.org".to_string(),
            primary: true,
        };
        let html = render_link(&link).render_html();
        assert!(html.contains(r#"class="button primary""#));
        assert!(html.contains(r#"target="_blank""#));
    }

    #[test]
    fn test_no_links_renders_nothing() {
        assert!(render_links(&[]).is_none());
    }
}
