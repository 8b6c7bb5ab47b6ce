//! Text-only sections: prose, sources and calls to action.

use folio_core::config::{CallToActionSection, ProseSection, SourcesSection};

use crate::components::{paragraph, render_links, section_heading};
use crate::node::{Node, el};

pub(crate) fn render_prose(section: &ProseSection) -> Vec<Node> {
    std::iter::once(section_heading(&section.heading))
        .chain(section.paragraphs.iter().map(|p| paragraph(p)))
        .collect()
}

pub(crate) fn render_sources(section: &SourcesSection) -> Vec<Node> {
    let items = section.sources.iter().map(|source| {
        let content: Node = match source.link() {
            Some(url) => el("a")
                .attr("href", url)
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .text(&source.label)
                .into(),
            None => el("span").text(&source.label).into(),
        };
        el("li").child(content).into()
    });

    vec![
        section_heading(&section.heading),
        el("ul").class("sources").children(items).into(),
    ]
}

pub(crate) fn render_call_to_action(section: &CallToActionSection) -> Vec<Node> {
    let mut nodes = Vec::new();
    if let Some(heading) = &section.heading {
        nodes.push(section_heading(heading));
    }
    nodes.push(paragraph(&section.body));
    if let Some(links) = render_links(&section.links) {
        nodes.push(links);
    }
    nodes
}
