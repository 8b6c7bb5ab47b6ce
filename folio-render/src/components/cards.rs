//! Callouts, card grids, phased plans and quotes.

use folio_core::config::identity::{callout_key, card_key, phase_key};
use folio_core::config::{Card, CalloutSection, CardGridSection, PhasesSection, QuoteSection};

use crate::components::{
    accent_style, bullet_list, card_shell, paragraph, render_detail, render_links, section_heading,
};
use crate::node::{Node, el};
use crate::page::RenderContext;

const DEFAULT_ACCENT: &str = "teal";
const NO_GO_ACCENT: &str = "severity-critical";

/// Badge colors, alternating by phase.
const PHASE_ACCENTS: [&str; 2] = ["teal", "gold"];

pub(crate) fn render_callout(
    section: &CalloutSection,
    section_slug: &str,
    ctx: &RenderContext,
) -> Vec<Node> {
    let mut nodes = Vec::new();
    if let Some(heading) = &section.heading {
        nodes.push(section_heading(heading));
    }
    if let Some(intro) = &section.intro {
        nodes.push(paragraph(intro));
    }

    let accent = section.accent.as_deref().unwrap_or(DEFAULT_ACCENT);
    nodes.push(
        card_shell(accent)
            .class("callout")
            .child_opt(
                section
                    .emphasis
                    .as_ref()
                    .map(|e| el("p").class("emphasis").text(e)),
            )
            .child(paragraph(&section.body))
            .into(),
    );

    if let Some(detail) = &section.detail {
        nodes.push(ctx.disclosure(callout_key(section_slug), || render_detail(detail)));
    }
    nodes
}

pub(crate) fn render_card_grid(
    section: &CardGridSection,
    section_slug: &str,
    ctx: &RenderContext,
) -> Vec<Node> {
    let mut nodes = Vec::new();
    if let Some(heading) = &section.heading {
        nodes.push(section_heading(heading));
    }
    if let Some(intro) = &section.intro {
        nodes.push(paragraph(intro));
    }

    let columns = section.columns.unwrap_or(3);
    nodes.push(render_grid(&section.cards, columns, section_slug, ctx));

    if let Some(note) = &section.note {
        nodes.push(render_note(note));
    }
    if let Some(links) = render_links(&section.links) {
        nodes.push(links);
    }
    nodes
}

pub(crate) fn render_quote(
    section: &QuoteSection,
    section_slug: &str,
    ctx: &RenderContext,
) -> Vec<Node> {
    let mut nodes = vec![
        section_heading(&section.heading),
        el("blockquote")
            .class("quote")
            .child(el("p").text(format!("“{}”", section.text)))
            .child(el("cite").text(format!("— {}", section.attribution)))
            .into(),
    ];
    if let Some(body) = &section.body {
        nodes.push(paragraph(body));
    }
    if !section.cards.is_empty() {
        let columns = u8::try_from(section.cards.len().min(3)).unwrap_or(3);
        nodes.push(render_grid(&section.cards, columns, section_slug, ctx));
    }
    if let Some(note) = &section.note {
        nodes.push(render_note(note));
    }
    nodes
}

pub(crate) fn render_phases(
    section: &PhasesSection,
    section_slug: &str,
    ctx: &RenderContext,
) -> Vec<Node> {
    let mut nodes = vec![section_heading(&section.heading)];
    if let Some(intro) = &section.intro {
        nodes.push(paragraph(intro));
    }

    for (index, phase) in section.phases.iter().enumerate() {
        let accent = PHASE_ACCENTS[index % PHASE_ACCENTS.len()];
        let mut card = card_shell(accent)
            .class("phase")
            .child(
                el("div")
                    .class("phase-header")
                    .child(
                        el("span")
                            .class("badge")
                            .attr("style", accent_style(accent))
                            .text(&phase.label),
                    )
                    .child(el("h3").text(&phase.title)),
            )
            .child(bullet_list(&phase.items));

        if let Some(detail) = &phase.detail {
            card = card.child(ctx.disclosure(
                phase_key(section_slug, &phase.label, index),
                || render_detail(detail),
            ));
        }
        nodes.push(card.into());
    }

    if let Some(no_go) = &section.no_go {
        nodes.push(
            card_shell(NO_GO_ACCENT)
                .class("no-go")
                .child(el("h3").class("card-title").text(&no_go.title))
                .child_opt(no_go.intro.as_deref().map(paragraph))
                .child(bullet_list(&no_go.items))
                .into(),
        );
    }
    nodes
}

fn render_grid(cards: &[Card], columns: u8, section_slug: &str, ctx: &RenderContext) -> Node {
    el("div")
        .class("grid")
        .attr("style", format!("--columns: {columns};"))
        .children(
            cards
                .iter()
                .enumerate()
                .map(|(index, card)| render_card(card, index, section_slug, ctx)),
        )
        .into()
}

/// Renders one generic card. Cards with `detail` get their own disclosure.
#[must_use]
pub fn render_card(card: &Card, index: usize, section_slug: &str, ctx: &RenderContext) -> Node {
    let title = match &card.icon {
        Some(icon) => format!("{icon} {}", card.title),
        None => card.title.clone(),
    };

    let mut shell = card_shell(card.accent.as_deref().unwrap_or(DEFAULT_ACCENT))
        .child(el("h3").class("card-title").text(title))
        .child_opt(card.body.as_deref().map(paragraph));

    if !card.items.is_empty() {
        shell = shell.child(bullet_list(&card.items));
    }
    if let Some(detail) = &card.detail {
        shell = shell.child(ctx.disclosure(
            card_key(section_slug, &card.title, index),
            || render_detail(detail),
        ));
    }
    shell.into()
}

fn render_note(note: &str) -> Node {
    el("p").class("note").text(note).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disclosure::DisclosureStates;
    use folio_core::config::Section;

    fn section(yaml: &str) -> Section {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn render(yaml: &str, ctx: &RenderContext) -> Node {
        let section = section(yaml);
        el("section")
            .children(crate::components::render_section(&section, 0, ctx))
            .into()
    }

    const CALLOUT: &str = r"
kind: callout
heading: The Core Problem
emphasis: It ships unlocked.
body: Security is opt-in.
accent: severity-critical
detail: Binds an unauthenticated endpoint.
";

    #[test]
    fn test_callout_collapsed() {
        let node = render(CALLOUT, &RenderContext::new("/p"));
        assert_eq!(node.find_by_class("emphasis")[0].text_content(), "It ships unlocked.");
        assert_eq!(node.count_text("Binds an unauthenticated endpoint."), 0);
        let cards = node.find_by_class("callout");
        assert!(cards[0].get_attr("style").unwrap().contains("var(--severity-critical)"));
    }

    #[test]
    fn test_callout_expanded() {
        let ctx = RenderContext::new("/p")
            .with_states(DisclosureStates::from_keys(["the-core-problem/detail"]));
        let node = render(CALLOUT, &ctx);
        assert_eq!(node.count_text("Binds an unauthenticated endpoint."), 1);
    }

    #[test]
    fn test_card_grid() {
        let yaml = r"
kind: card_grid
heading: What It Does Well
columns: 2
cards:
  - { title: Docker Sandboxing, body: Isolates skills. }
  - title: Security CLI
    icon: '🛡'
    items: [scan, harden]
    detail: Runs in CI.
note: None of it is on by default.
links: [{ label: More, href: /more }]
";
        let node = render(yaml, &RenderContext::new("/p"));
        let titles: Vec<_> = node
            .find_by_class("card-title")
            .iter()
            .map(|e| e.text_content())
            .collect();
        assert_eq!(titles, vec!["Docker Sandboxing", "🛡 Security CLI"]);
        assert_eq!(node.find_by_class("grid")[0].get_attr("style"), Some("--columns: 2;"));
        assert_eq!(node.find_by_class("disclosure").len(), 1);
        assert_eq!(node.count_text("scan"), 1);
        assert_eq!(node.find_by_class("note").len(), 1);
        assert_eq!(node.find_by_class("button").len(), 1);
    }

    #[test]
    fn test_phases() {
        let yaml = r"
kind: phases
heading: Pilot Recommendation
phases:
  - label: Phase 1
    title: Isolated Evaluation
    items: [Run in a VM]
    detail: { items: [Docker Compose] }
  - label: Phase 2
    title: Expanded Pilot
    items: [Human in the loop]
no_go:
  title: Hard No-Go Criteria
  intro: 'Stop if:'
  items: [No isolation]
";
        let ctx = RenderContext::new("/p")
            .with_states(DisclosureStates::from_keys(["pilot-recommendation/phase-1"]));
        let node = render(yaml, &ctx);
        assert_eq!(node.find_by_class("phase").len(), 2);
        assert_eq!(node.find_by_class("disclosure").len(), 1);
        assert_eq!(node.count_text("Docker Compose"), 1);
        let badges: Vec<_> = node
            .find_by_class("badge")
            .iter()
            .filter_map(|b| b.get_attr("style"))
            .collect();
        assert_eq!(badges, vec!["--accent: var(--teal);", "--accent: var(--gold);"]);
        assert_eq!(node.find_by_class("no-go")[0].count_text("No isolation"), 1);
    }

    #[test]
    fn test_quote() {
        let yaml = r"
kind: quote
heading: Philosophy
text: Trust is earned.
attribution: Someone
body: More words.
";
        let node = render(yaml, &RenderContext::new("/p"));
        let text = node.text_content();
        assert!(text.contains("“Trust is earned.”"));
        assert!(text.contains("— Someone"));
        assert!(node.find_by_class("grid").is_empty());
    }
}
