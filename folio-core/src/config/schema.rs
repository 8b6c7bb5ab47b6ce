//! Site content schema
//!
//! These types are deserialized from the YAML content file. They are
//! created once at load time and never mutated afterwards.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::slug::slugify;

// ============================================================================
// Top-Level Configuration
// ============================================================================

/// Root of a site content file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SiteConfig {
    /// Site identification (required)
    pub site: SiteMetadata,

    /// Theme token overrides, merged over the renderer defaults
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub theme: IndexMap<String, String>,

    /// Section reveal timing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reveal: Option<RevealSettings>,

    /// Pages in navigation order
    pub pages: Vec<Page>,
}

impl SiteConfig {
    /// Looks up a page by slug.
    #[must_use]
    pub fn page(&self, slug: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.slug == slug)
    }

    /// Returns the reveal settings, falling back to defaults.
    #[must_use]
    pub fn reveal_settings(&self) -> RevealSettings {
        self.reveal.clone().unwrap_or_default()
    }
}

/// Site identification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMetadata {
    /// Site name, appended to every page title
    pub name: String,

    /// Canonical base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Site author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Longest accepted per-section reveal delay, in milliseconds.
pub const MAX_BASE_DELAY_MS: u64 = 60_000;

/// Timing for the staggered section reveal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealSettings {
    /// Delay added per section index, in milliseconds. Must be positive.
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    /// Duration of each section's entrance, in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,

    /// Vertical offset a section starts from, in pixels
    #[serde(default = "default_offset_px")]
    pub offset_px: u32,
}

const fn default_base_delay_ms() -> u64 {
    100
}

const fn default_duration_ms() -> u64 {
    500
}

const fn default_offset_px() -> u32 {
    20
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            base_delay_ms: default_base_delay_ms(),
            duration_ms: default_duration_ms(),
            offset_px: default_offset_px(),
        }
    }
}

impl RevealSettings {
    /// Checks the timing bounds.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a zero or over-long base
    /// delay, or a zero duration.
    pub fn check(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_BASE_DELAY_MS).contains(&self.base_delay_ms) {
            return Err(ConfigError::InvalidValue {
                field: "base_delay_ms".to_string(),
                value: self.base_delay_ms.to_string(),
                expected: format!("1 to {MAX_BASE_DELAY_MS} milliseconds"),
            });
        }
        if self.duration_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "duration_ms".to_string(),
                value: "0".to_string(),
                expected: "a positive number of milliseconds".to_string(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Pages
// ============================================================================

/// A single page, rendered at `/{slug}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// URL slug, `[a-z0-9-]+`
    pub slug: String,

    /// Page heading and `<title>` prefix
    pub title: String,

    /// Description meta tag and listing blurb
    pub description: String,

    /// Lead paragraph under the heading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Small print above the subtitle (e.g. "Opinion piece")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byline: Option<String>,

    /// Publication date, shown as "Month Year" after the byline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<NaiveDate>,

    /// Link rendered above the heading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_link: Option<Link>,

    /// Top-level sections in display order
    pub sections: Vec<Section>,
}

/// A hyperlink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Link text
    pub label: String,

    /// Target URL or site path
    pub href: String,

    /// Render as the primary call to action
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub primary: bool,
}

impl Link {
    /// Returns `true` if the link leaves the site.
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

// ============================================================================
// Sections
// ============================================================================

/// A top-level page section, tagged by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    /// Heading followed by paragraphs
    Prose(ProseSection),
    /// Highlighted card, optionally with a disclosure
    Callout(CalloutSection),
    /// Severity-bucketed risk cards
    RiskMatrix(RiskMatrixSection),
    /// Grid of uniform cards
    CardGrid(CardGridSection),
    /// Phased plan with go/no-go criteria
    Phases(PhasesSection),
    /// Pull quote with supporting text
    Quote(QuoteSection),
    /// Reference list
    Sources(SourcesSection),
    /// Closing links
    CallToAction(CallToActionSection),
}

impl Section {
    /// Returns the section heading, if any.
    #[must_use]
    pub fn heading(&self) -> Option<&str> {
        match self {
            Self::Prose(s) => Some(&s.heading),
            Self::Callout(s) => s.heading.as_deref(),
            Self::RiskMatrix(s) => Some(&s.heading),
            Self::CardGrid(s) => s.heading.as_deref(),
            Self::Phases(s) => Some(&s.heading),
            Self::Quote(s) => Some(&s.heading),
            Self::Sources(s) => Some(&s.heading),
            Self::CallToAction(s) => s.heading.as_deref(),
        }
    }

    /// Returns the `kind` tag as written in YAML.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Prose(_) => "prose",
            Self::Callout(_) => "callout",
            Self::RiskMatrix(_) => "risk_matrix",
            Self::CardGrid(_) => "card_grid",
            Self::Phases(_) => "phases",
            Self::Quote(_) => "quote",
            Self::Sources(_) => "sources",
            Self::CallToAction(_) => "call_to_action",
        }
    }

    /// Identity slug for this section, derived from its heading.
    ///
    /// Headless sections fall back to `{kind}-{index}`.
    #[must_use]
    pub fn slug(&self, index: usize) -> String {
        let fallback = self.kind().replace('_', "-");
        self.heading()
            .map_or_else(|| format!("{fallback}-{index}"), |h| slugify(h, &fallback, index))
    }
}

/// Extended content hidden behind a disclosure.
///
/// Accepts either a plain string or an intro plus bullet list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Detail {
    /// A single paragraph
    Text(String),
    /// Optional intro paragraph followed by bullets
    List {
        /// Paragraph before the bullets
        #[serde(default, skip_serializing_if = "Option::is_none")]
        intro: Option<String>,
        /// Bullet points
        items: Vec<String>,
    },
}

impl Detail {
    /// Returns `true` if the detail has no visible text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(t) => t.trim().is_empty(),
            Self::List { intro, items } => {
                intro.as_deref().is_none_or(|i| i.trim().is_empty())
                    && items.iter().all(|i| i.trim().is_empty())
            }
        }
    }
}

/// `kind: prose`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProseSection {
    /// Section heading
    pub heading: String,
    /// Paragraphs in order
    pub paragraphs: Vec<String>,
}

/// `kind: callout`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalloutSection {
    /// Section heading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    /// Paragraph shown before the card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    /// Emphasized first line inside the card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<String>,
    /// Card body
    pub body: String,
    /// Theme token used for the card accent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    /// Disclosure content under the card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Detail>,
}

/// `kind: risk_matrix`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskMatrixSection {
    /// Section heading
    pub heading: String,
    /// Buckets in display order
    pub buckets: Vec<Bucket>,
}

/// `kind: card_grid`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardGridSection {
    /// Section heading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    /// Paragraph shown before the grid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    /// Number of columns on wide screens (1-4)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u8>,
    /// Cards in display order
    pub cards: Vec<Card>,
    /// Highlighted note under the grid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Links under the grid
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// A generic content card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Card title
    pub title: String,
    /// Card paragraph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Leading glyph or emoji
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Bullet points
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
    /// Theme token used for the title color and border
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    /// Disclosure content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Detail>,
}

/// `kind: phases`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhasesSection {
    /// Section heading
    pub heading: String,
    /// Paragraph shown before the phases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    /// Phases in order
    pub phases: Vec<PhaseStep>,
    /// Stop criteria card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_go: Option<NoGoCriteria>,
}

/// One phase of a phased plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseStep {
    /// Short badge text (e.g. "Phase 1")
    pub label: String,
    /// Phase title
    pub title: String,
    /// Plain-language steps
    pub items: Vec<String>,
    /// Technical steps behind a disclosure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Detail>,
}

/// Conditions that stop a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoGoCriteria {
    /// Card title
    pub title: String,
    /// Sentence before the list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    /// Criteria
    pub items: Vec<String>,
}

/// `kind: quote`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteSection {
    /// Section heading
    pub heading: String,
    /// Quoted text, without quotation marks
    pub text: String,
    /// Who said it
    pub attribution: String,
    /// Paragraph after the quote
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Supporting cards
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cards: Vec<Card>,
    /// Highlighted note at the end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// `kind: sources`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesSection {
    /// Section heading
    pub heading: String,
    /// References in order
    pub sources: Vec<Source>,
}

/// A reference. Placeholder URLs (`#`) render as plain text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    /// Reference text
    pub label: String,
    /// Target URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Source {
    /// Returns the URL when it points somewhere.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.url
            .as_deref()
            .filter(|u| !u.trim().is_empty() && *u != "#")
    }
}

/// `kind: call_to_action`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToActionSection {
    /// Section heading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    /// Lead paragraph
    pub body: String,
    /// Buttons in order
    pub links: Vec<Link>,
}

// ============================================================================
// Risk Content
// ============================================================================

/// Risk severity, used to group and style risk cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Exploitable with minimal effort
    Critical,
    /// Needs context-specific exploitation
    High,
    /// Organisational and process risk
    Medium,
    /// Limited practical impact
    Low,
}

impl Severity {
    /// Lowercase identifier, used in CSS classes and theme tokens.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Display label for the bucket pill.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Qualitative description of how hard the risks are to exploit.
    #[must_use]
    pub const fn default_description(self) -> &'static str {
        match self {
            Self::Critical => "Exploitable with minimal effort",
            Self::High => "Requires context-specific exploitation",
            Self::Medium => "Organisational and process risks",
            Self::Low => "Limited practical impact",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, ordered group of risk items sharing a severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    /// Severity shared by every item
    pub severity: Severity,

    /// Overrides the severity's default description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Items in display order (non-empty)
    pub items: Vec<RiskItem>,
}

impl Bucket {
    /// Builds a bucket, rejecting an empty item list.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingRequired` if `items` is empty.
    pub fn new(severity: Severity, items: Vec<RiskItem>) -> Result<Self, ConfigError> {
        if items.is_empty() {
            return Err(ConfigError::MissingRequired {
                field: "items".to_string(),
                location: format!("{severity} bucket"),
            });
        }
        Ok(Self {
            severity,
            description: None,
            items,
        })
    }

    /// Sets a custom description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Description shown next to the severity label.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or_else(|| self.severity.default_description())
    }
}

/// A static content record: title, plain summary, technical detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskItem {
    /// Card title
    pub title: String,

    /// Plain-language summary, always visible
    #[serde(rename = "plain", alias = "plainSummary", alias = "plain_summary")]
    pub plain_summary: String,

    /// Technical detail, shown behind a disclosure
    #[serde(rename = "technical", alias = "technicalDetail", alias = "technical_detail")]
    pub technical_detail: String,
}

impl RiskItem {
    /// Builds a risk item, failing fast on blank fields.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingRequired` naming the first blank field.
    pub fn new(
        title: impl Into<String>,
        plain_summary: impl Into<String>,
        technical_detail: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let item = Self {
            title: title.into(),
            plain_summary: plain_summary.into(),
            technical_detail: technical_detail.into(),
        };
        if let Some(field) = item.first_blank_field() {
            return Err(ConfigError::MissingRequired {
                field: field.to_string(),
                location: format!("risk item \"{}\"", item.title),
            });
        }
        Ok(item)
    }

    /// Returns the YAML name of the first blank field, if any.
    #[must_use]
    pub fn first_blank_field(&self) -> Option<&'static str> {
        if self.title.trim().is_empty() {
            Some("title")
        } else if self.plain_summary.trim().is_empty() {
            Some("plain")
        } else if self.technical_detail.trim().is_empty() {
            Some("technical")
        } else {
            None
        }
    }

    /// Identity slug derived from the title.
    #[must_use]
    pub fn slug(&self, index: usize) -> String {
        slugify(&self.title, "item", index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_item_new_valid() {
        let item = RiskItem::new("A", "a", "ta").unwrap();
        assert_eq!(item.title, "A");
        assert_eq!(item.plain_summary, "a");
        assert_eq!(item.technical_detail, "ta");
    }

    #[test]
    fn test_risk_item_new_empty_title_fails() {
        let err = RiskItem::new("  ", "a", "ta").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingRequired { ref field, .. } if field == "title"
        ));
    }

    #[test]
    fn test_risk_item_new_empty_detail_fails() {
        let err = RiskItem::new("A", "a", "").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingRequired { ref field, .. } if field == "technical"
        ));
    }

    #[test]
    fn test_risk_item_missing_field_fails_to_parse() {
        let yaml = "title: A\nplain: a\n";
        let result: Result<RiskItem, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_risk_item_camel_case_aliases() {
        let yaml = "title: A\nplainSummary: a\ntechnicalDetail: ta\n";
        let item: RiskItem = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(item.plain_summary, "a");
        assert_eq!(item.technical_detail, "ta");
    }

    #[test]
    fn test_bucket_new_rejects_empty() {
        assert!(Bucket::new(Severity::High, vec![]).is_err());
    }

    #[test]
    fn test_reveal_check_bounds() {
        let mut settings = RevealSettings::default();
        assert!(settings.check().is_ok());

        settings.base_delay_ms = MAX_BASE_DELAY_MS;
        assert!(settings.check().is_ok());

        settings.base_delay_ms = MAX_BASE_DELAY_MS + 1;
        let err = settings.check().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, ref value, .. }
                if field == "base_delay_ms" && value == "60001"
        ));

        settings.base_delay_ms = 0;
        assert!(settings.check().is_err());

        let settings = RevealSettings {
            duration_ms: 0,
            ..RevealSettings::default()
        };
        assert!(matches!(
            settings.check(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "duration_ms"
        ));
    }

    #[test]
    fn test_bucket_default_description() {
        let bucket = Bucket::new(Severity::Critical, vec![RiskItem::new("A", "a", "ta").unwrap()])
            .unwrap();
        assert_eq!(bucket.description(), "Exploitable with minimal effort");
        let bucket = bucket.with_description("Trivial");
        assert_eq!(bucket.description(), "Trivial");
    }

    #[test]
    fn test_severity_deserializes_lowercase() {
        let sev: Severity = serde_yaml::from_str("medium").unwrap();
        assert_eq!(sev, Severity::Medium);
        assert!(serde_yaml::from_str::<Severity>("severe").is_err());
    }

    #[test]
    fn test_section_tagged_by_kind() {
        let yaml = r"
kind: risk_matrix
heading: Risk Matrix
buckets:
  - severity: critical
    items:
      - title: A
        plain: a
        technical: ta
";
        let section: Section = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(section.kind(), "risk_matrix");
        assert_eq!(section.heading(), Some("Risk Matrix"));
        assert_eq!(section.slug(2), "risk-matrix");
    }

    #[test]
    fn test_headless_section_slug_falls_back_to_kind() {
        let yaml = "kind: call_to_action\nbody: Say hi\nlinks: []\n";
        let section: Section = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(section.slug(6), "call-to-action-6");
    }

    #[test]
    fn test_detail_accepts_string_or_list() {
        let text: Detail = serde_yaml::from_str("\"plain text\"").unwrap();
        assert_eq!(text, Detail::Text("plain text".to_string()));

        let list: Detail = serde_yaml::from_str("intro: Vectors\nitems: [a, b]\n").unwrap();
        assert!(matches!(list, Detail::List { ref items, .. } if items.len() == 2));
        assert!(!list.is_blank());
        assert!(Detail::List { intro: None, items: vec![] }.is_blank());
    }

    #[test]
    fn test_source_placeholder_is_not_a_link() {
        let placeholder = Source {
            label: "Docs".to_string(),
            url: Some("#".to_string()),
        };
        assert_eq!(placeholder.link(), None);
        let real = Source {
            label: "OWASP".to_string(),
            url: Some("https://owasp.org".to_string()),
        };
        assert_eq!(real.link(), Some("https://owasp.org"));
    }

    #[test]
    fn test_page_published_date() {
        let yaml = r"
slug: risk
title: Risk
description: d
published: 2026-01-15
sections: []
";
        let page: Page = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(page.published, NaiveDate::from_ymd_opt(2026, 1, 15));
    }

    #[test]
    fn test_reveal_settings_defaults() {
        let settings: RevealSettings = serde_yaml::from_str("base_delay_ms: 150").unwrap();
        assert_eq!(settings.base_delay_ms, 150);
        assert_eq!(settings.duration_ms, 500);
        assert_eq!(settings.offset_px, 20);
    }
}
