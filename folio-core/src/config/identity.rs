//! Content identity for disclosure instances.
//!
//! Every disclosure on a page is keyed by where its content lives, never by
//! its position in a list. Keys are built from slugs, so reordering cards
//! keeps each card's key and adding a card never shifts another card's key.

use crate::config::schema::{Card, Page, Section, Severity};
use crate::slug::slugify;

/// A disclosure instance found on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureSite {
    /// Stable content-identity key
    pub key: String,
    /// Location in the content file, for diagnostics
    pub path: String,
}

/// Key for the disclosure under a callout card.
#[must_use]
pub fn callout_key(section_slug: &str) -> String {
    format!("{section_slug}/detail")
}

/// Key for a risk card's technical detail.
#[must_use]
pub fn risk_item_key(section_slug: &str, severity: Severity, item_slug: &str) -> String {
    format!("{section_slug}/{severity}/{item_slug}")
}

/// Key for a generic card's detail.
#[must_use]
pub fn card_key(section_slug: &str, title: &str, index: usize) -> String {
    format!("{section_slug}/{}", slugify(title, "card", index))
}

/// Key for a phase's technical steps.
#[must_use]
pub fn phase_key(section_slug: &str, label: &str, index: usize) -> String {
    format!("{section_slug}/{}", slugify(label, "phase", index))
}

/// Lists every disclosure on a page in document order.
#[must_use]
pub fn disclosure_sites(page: &Page) -> Vec<DisclosureSite> {
    let mut sites = Vec::new();

    for (s_idx, section) in page.sections.iter().enumerate() {
        let section_slug = section.slug(s_idx);
        let base = format!("pages[{}].sections[{s_idx}]", page.slug);

        match section {
            Section::Callout(callout) => {
                if callout.detail.is_some() {
                    sites.push(DisclosureSite {
                        key: callout_key(&section_slug),
                        path: format!("{base}.detail"),
                    });
                }
            }
            Section::RiskMatrix(matrix) => {
                for (b_idx, bucket) in matrix.buckets.iter().enumerate() {
                    for (i_idx, item) in bucket.items.iter().enumerate() {
                        sites.push(DisclosureSite {
                            key: risk_item_key(&section_slug, bucket.severity, &item.slug(i_idx)),
                            path: format!("{base}.buckets[{b_idx}].items[{i_idx}]"),
                        });
                    }
                }
            }
            Section::CardGrid(grid) => {
                push_card_sites(&mut sites, &section_slug, &base, &grid.cards);
            }
            Section::Quote(quote) => {
                push_card_sites(&mut sites, &section_slug, &base, &quote.cards);
            }
            Section::Phases(phases) => {
                for (p_idx, phase) in phases.phases.iter().enumerate() {
                    if phase.detail.is_some() {
                        sites.push(DisclosureSite {
                            key: phase_key(&section_slug, &phase.label, p_idx),
                            path: format!("{base}.phases[{p_idx}].detail"),
                        });
                    }
                }
            }
            Section::Prose(_) | Section::Sources(_) | Section::CallToAction(_) => {}
        }
    }

    sites
}

fn push_card_sites(
    sites: &mut Vec<DisclosureSite>,
    section_slug: &str,
    base: &str,
    cards: &[Card],
) {
    for (c_idx, card) in cards.iter().enumerate() {
        if card.detail.is_some() {
            sites.push(DisclosureSite {
                key: card_key(section_slug, &card.title, c_idx),
                path: format!("{base}.cards[{c_idx}].detail"),
            });
        }
    }
}
