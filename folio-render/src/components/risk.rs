//! Severity-bucketed risk cards.
//!
//! Every item in a bucket renders through the same card: title styled by
//! severity, plain summary always visible, technical detail behind its own
//! disclosure. Items render in bucket order.

use folio_core::config::identity::risk_item_key;
use folio_core::config::{Bucket, RiskItem, RiskMatrixSection};

use crate::components::{accent_style, card_shell, paragraph, section_heading};
use crate::node::{Node, el};
use crate::page::RenderContext;
use crate::theme::severity_token;

pub(crate) fn render_risk_matrix(
    section: &RiskMatrixSection,
    section_slug: &str,
    ctx: &RenderContext,
) -> Vec<Node> {
    let mut nodes = vec![section_heading(&section.heading)];
    nodes.extend(
        section
            .buckets
            .iter()
            .map(|bucket| render_bucket(bucket, section_slug, ctx)),
    );
    nodes
}

/// Renders one bucket: a severity pill with its description, then one card
/// per item.
#[must_use]
pub fn render_bucket(bucket: &Bucket, section_slug: &str, ctx: &RenderContext) -> Node {
    let token = severity_token(bucket.severity);

    let header = el("div")
        .class("bucket-header")
        .child(
            el("span")
                .class("pill")
                .attr("style", accent_style(&token))
                .text(bucket.severity.label()),
        )
        .child(
            el("span")
                .class("bucket-description")
                .text(format!("— {}", bucket.description())),
        );

    let cards = bucket
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| render_risk_card(bucket, item, index, section_slug, ctx));

    el("div")
        .class("bucket")
        .attr("data-severity", bucket.severity.as_str())
        .child(header)
        .child(el("div").class("bucket-items").children(cards))
        .into()
}

fn render_risk_card(
    bucket: &Bucket,
    item: &RiskItem,
    index: usize,
    section_slug: &str,
    ctx: &RenderContext,
) -> Node {
    let key = risk_item_key(section_slug, bucket.severity, &item.slug(index));
    card_shell(&severity_token(bucket.severity))
        .class("risk-card")
        .child(el("h3").class("card-title").text(&item.title))
        .child(el("p").class("plain").text(&item.plain_summary))
        .child(ctx.disclosure(key, || paragraph(&item.technical_detail)))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disclosure::{DisclosureKey, DisclosureStates};
    use folio_core::config::Severity;

    fn bucket(items: &[(&str, &str, &str)]) -> Bucket {
        Bucket::new(
            Severity::High,
            items
                .iter()
                .map(|(t, p, d)| RiskItem::new(*t, *p, *d).unwrap())
                .collect(),
        )
        .unwrap()
    }

    fn titles(node: &Node) -> Vec<String> {
        node.find_by_class("card-title")
            .iter()
            .map(|e| e.text_content())
            .collect()
    }

    #[test]
    fn test_header_pill_and_description() {
        let node = render_bucket(&bucket(&[("A", "a", "ta")]), "risks", &RenderContext::new("/p"));
        assert_eq!(node.find_by_class("pill")[0].text_content(), "High");
        assert_eq!(
            node.find_by_class("bucket-description")[0].text_content(),
            "— Requires context-specific exploitation"
        );
        let pill_style = node.find_by_class("pill")[0].get_attr("style").unwrap();
        assert!(pill_style.contains("var(--severity-high)"));
    }

    #[test]
    fn test_three_items_three_cards_in_order() {
        let b = bucket(&[("One", "1", "t1"), ("Two", "2", "t2"), ("Three", "3", "t3")]);
        let node = render_bucket(&b, "risks", &RenderContext::new("/p"));
        assert_eq!(node.find_by_class("risk-card").len(), 3);
        assert_eq!(titles(&node), vec!["One", "Two", "Three"]);
        assert_eq!(node.find_by_class("disclosure").len(), 3);
    }

    #[test]
    fn test_toggling_one_card_leaves_others() {
        let b = bucket(&[("One", "1", "t1"), ("Two", "2", "t2"), ("Three", "3", "t3")]);
        let mut states = DisclosureStates::new();
        states.toggle(&DisclosureKey::new("risks/high/two"));
        let ctx = RenderContext::new("/p").with_states(states);
        let node = render_bucket(&b, "risks", &ctx);

        let disclosures = node.find_by_class("disclosure");
        let open: Vec<_> = disclosures
            .iter()
            .map(|d| d.get_attr("data-state").unwrap_or_default())
            .collect();
        assert_eq!(open, vec!["collapsed", "expanded", "collapsed"]);
        assert_eq!(node.count_text("t1"), 0);
        assert_eq!(node.count_text("t2"), 1);
        assert_eq!(node.count_text("t3"), 0);
    }

    #[test]
    fn test_end_to_end_two_cards() {
        let b = bucket(&[("A", "a", "ta"), ("B", "b", "tb")]);

        let collapsed = render_bucket(&b, "risks", &RenderContext::new("/p"));
        assert_eq!(titles(&collapsed), vec!["A", "B"]);
        assert_eq!(collapsed.count_text("ta"), 0);
        assert_eq!(collapsed.count_text("tb"), 0);
        assert_eq!(collapsed.count_text("a"), 1);
        assert_eq!(collapsed.count_text("b"), 1);

        let mut states = DisclosureStates::new();
        states.toggle(&DisclosureKey::new("risks/high/a"));
        let toggled = render_bucket(&b, "risks", &RenderContext::new("/p").with_states(states));
        assert_eq!(titles(&toggled), vec!["A", "B"]);
        assert_eq!(toggled.count_text("ta"), 1);
        assert_eq!(toggled.count_text("tb"), 0);
        let cards = toggled.find_by_class("risk-card");
        assert!(cards[1].find_by_class("disclosure-body").is_empty());
    }

    #[test]
    fn test_toggle_links_carry_only_own_key() {
        let b = bucket(&[("A", "a", "ta"), ("B", "b", "tb")]);
        let node = render_bucket(&b, "risks", &RenderContext::new("/p"));
        let hrefs: Vec<_> = node
            .find_by_class("disclosure-toggle")
            .iter()
            .filter_map(|e| e.get_attr("href"))
            .collect();
        assert_eq!(
            hrefs,
            vec![
                "/p?open=risks/high/a#detail-risks/high/a",
                "/p?open=risks/high/b#detail-risks/high/b",
            ]
        );
    }
}
