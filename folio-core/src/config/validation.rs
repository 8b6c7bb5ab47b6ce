//! Content validation
//!
//! Runs on the fully deserialized `SiteConfig`. Serde already rejects
//! missing fields; this pass rejects blank ones, empty buckets, duplicate
//! identities and anything else that would render a broken page.
//!
//! Validation collects ALL issues (doesn't stop at first) so a content
//! author sees every problem in one run.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::config::identity::disclosure_sites;
use crate::config::tokens::is_default_token;
use crate::config::loader::ContentLimits;
use crate::config::schema::{Card, Detail, Link, Page, RevealSettings, Section, SiteConfig};
use crate::error::{ConfigError, IssueLevel, ValidationIssue};
use crate::slug::is_valid_slug;

static TOKEN_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9-]*$").expect("valid regex"));

/// Titles longer than this get a warning.
const LONG_TITLE: usize = 80;

/// Base delays above this still render, but lower sections arrive late.
const SLOW_BASE_DELAY_MS: u64 = 2_000;

// ============================================================================
// Public API
// ============================================================================

/// Result of content validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Issues that prevent rendering.
    pub errors: Vec<ValidationIssue>,

    /// Issues worth a look that still render.
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Moves warnings into errors.
    pub fn promote_warnings(&mut self) {
        for mut warning in self.warnings.drain(..) {
            warning.level = IssueLevel::Error;
            self.errors.push(warning);
        }
    }
}

/// Content validator.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
    /// Token names from the `theme:` block of the site being validated
    custom_tokens: HashSet<String>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a site and returns every issue found.
    pub fn validate(&mut self, config: &SiteConfig, limits: &ContentLimits) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();
        self.custom_tokens = config.theme.keys().cloned().collect();

        self.validate_site(config);
        self.validate_theme(config);
        if let Some(ref reveal) = config.reveal {
            self.validate_reveal(reveal);
        }
        self.validate_pages(config, limits);

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    // ========================================================================
    // Site
    // ========================================================================

    fn validate_site(&mut self, config: &SiteConfig) {
        if config.site.name.trim().is_empty() {
            self.add_error("site.name", "site name is required and cannot be empty");
        }
        if let Some(ref url) = config.site.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                self.add_error("site.base_url", "base URL must start with http:// or https://");
            }
        }
    }

    fn validate_theme(&mut self, config: &SiteConfig) {
        for (name, value) in &config.theme {
            let path = format!("theme.{name}");
            if !TOKEN_NAME.is_match(name) {
                self.add_error(&path, "token name must match [a-z][a-z0-9-]*");
            }
            if value.trim().is_empty() {
                self.add_error(&path, "token value is empty");
            } else if value.contains([';', '{', '}', '<']) {
                self.add_error(&path, "token value must not contain ';', '{', '}' or '<'");
            }
        }
    }

    fn validate_reveal(&mut self, reveal: &RevealSettings) {
        match reveal.check() {
            Err(ConfigError::InvalidValue { field, value, expected }) => {
                self.add_error(
                    &format!("reveal.{field}"),
                    &format!("got {value}, expected {expected}"),
                );
            }
            Err(err) => self.add_error("reveal", &err.to_string()),
            Ok(()) if reveal.base_delay_ms > SLOW_BASE_DELAY_MS => {
                self.add_warning(
                    "reveal.base_delay_ms",
                    &format!("base delay above {SLOW_BASE_DELAY_MS}ms delays lower sections"),
                );
            }
            Ok(()) => {}
        }
    }

    // ========================================================================
    // Pages
    // ========================================================================

    fn validate_pages(&mut self, config: &SiteConfig, limits: &ContentLimits) {
        if config.pages.is_empty() {
            self.add_error("pages", "at least one page is required");
            return;
        }
        if config.pages.len() > limits.max_pages {
            self.add_error(
                "pages",
                &format!(
                    "{} pages exceeds limit of {}",
                    config.pages.len(),
                    limits.max_pages
                ),
            );
        }

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (idx, page) in config.pages.iter().enumerate() {
            let base = format!("pages[{idx}]");
            if let Some(first) = seen.insert(page.slug.as_str(), idx) {
                self.add_error(
                    &format!("{base}.slug"),
                    &format!("duplicate slug \"{}\", first used by pages[{first}]", page.slug),
                );
            }
            self.validate_page(page, &base, limits);
        }
    }

    fn validate_page(&mut self, page: &Page, base: &str, limits: &ContentLimits) {
        if !is_valid_slug(&page.slug) {
            self.add_error(
                &format!("{base}.slug"),
                &format!("\"{}\" is not a valid slug ([a-z0-9-]+)", page.slug),
            );
        }
        self.require_text(&format!("{base}.title"), &page.title);
        self.require_text(&format!("{base}.description"), &page.description);
        if page.title.chars().count() > LONG_TITLE {
            self.add_warning(
                &format!("{base}.title"),
                &format!("title is unusually long (> {LONG_TITLE} characters)"),
            );
        }
        if let Some(ref link) = page.back_link {
            self.validate_link(&format!("{base}.back_link"), link);
        }

        if page.sections.is_empty() {
            self.add_warning(&format!("{base}.sections"), "page has no sections");
        }
        if page.sections.len() > limits.max_sections {
            self.add_error(
                &format!("{base}.sections"),
                &format!(
                    "{} sections exceeds limit of {}",
                    page.sections.len(),
                    limits.max_sections
                ),
            );
        }

        for (idx, section) in page.sections.iter().enumerate() {
            self.validate_section(section, &format!("{base}.sections[{idx}]"), limits);
        }

        self.validate_disclosure_keys(page, base);
    }

    /// Two disclosures with the same key would share state.
    fn validate_disclosure_keys(&mut self, page: &Page, base: &str) {
        let mut keys: HashSet<String> = HashSet::new();
        for site in disclosure_sites(page) {
            if !keys.insert(site.key.clone()) {
                self.add_error(
                    base,
                    &format!(
                        "duplicate disclosure key \"{}\" at {}; give the card a distinct title",
                        site.key, site.path
                    ),
                );
            }
        }
    }

    // ========================================================================
    // Sections
    // ========================================================================

    fn validate_section(&mut self, section: &Section, base: &str, limits: &ContentLimits) {
        if let Some(heading) = section.heading() {
            self.require_text(&format!("{base}.heading"), heading);
        }

        match section {
            Section::Prose(prose) => {
                if prose.paragraphs.is_empty() {
                    self.add_error(
                        &format!("{base}.paragraphs"),
                        "at least one paragraph is required",
                    );
                }
                self.require_each(&format!("{base}.paragraphs"), &prose.paragraphs);
            }
            Section::Callout(callout) => {
                self.require_text(&format!("{base}.body"), &callout.body);
                self.validate_accent(&format!("{base}.accent"), callout.accent.as_deref());
                self.validate_detail(&format!("{base}.detail"), callout.detail.as_ref());
            }
            Section::RiskMatrix(matrix) => {
                if matrix.buckets.is_empty() {
                    self.add_error(&format!("{base}.buckets"), "at least one bucket is required");
                }
                let mut severities = HashSet::new();
                for (b_idx, bucket) in matrix.buckets.iter().enumerate() {
                    let b_base = format!("{base}.buckets[{b_idx}]");
                    if !severities.insert(bucket.severity) {
                        self.add_warning(
                            &format!("{b_base}.severity"),
                            &format!("{} appears in more than one bucket", bucket.severity),
                        );
                    }
                    if bucket.items.is_empty() {
                        self.add_error(&format!("{b_base}.items"), "bucket has no items");
                    }
                    if bucket.items.len() > limits.max_items_per_bucket {
                        self.add_error(
                            &format!("{b_base}.items"),
                            &format!(
                                "{} items exceeds limit of {}",
                                bucket.items.len(),
                                limits.max_items_per_bucket
                            ),
                        );
                    }
                    for (i_idx, item) in bucket.items.iter().enumerate() {
                        if let Some(field) = item.first_blank_field() {
                            self.add_error(
                                &format!("{b_base}.items[{i_idx}].{field}"),
                                &format!("{field} is empty"),
                            );
                        }
                    }
                }
            }
            Section::CardGrid(grid) => {
                if grid.cards.is_empty() {
                    self.add_error(&format!("{base}.cards"), "at least one card is required");
                }
                if let Some(columns) = grid.columns {
                    if !(1..=4).contains(&columns) {
                        self.add_error(
                            &format!("{base}.columns"),
                            &format!("columns must be between 1 and 4, got {columns}"),
                        );
                    }
                }
                self.validate_cards(base, &grid.cards);
                for (idx, link) in grid.links.iter().enumerate() {
                    self.validate_link(&format!("{base}.links[{idx}]"), link);
                }
            }
            Section::Phases(phases) => {
                if phases.phases.is_empty() {
                    self.add_error(&format!("{base}.phases"), "at least one phase is required");
                }
                for (p_idx, phase) in phases.phases.iter().enumerate() {
                    let p_base = format!("{base}.phases[{p_idx}]");
                    self.require_text(&format!("{p_base}.label"), &phase.label);
                    self.require_text(&format!("{p_base}.title"), &phase.title);
                    self.require_each(&format!("{p_base}.items"), &phase.items);
                    self.validate_detail(&format!("{p_base}.detail"), phase.detail.as_ref());
                }
                if let Some(ref no_go) = phases.no_go {
                    self.require_text(&format!("{base}.no_go.title"), &no_go.title);
                    if no_go.items.is_empty() {
                        self.add_error(
                            &format!("{base}.no_go.items"),
                            "at least one criterion is required",
                        );
                    }
                    self.require_each(&format!("{base}.no_go.items"), &no_go.items);
                }
            }
            Section::Quote(quote) => {
                self.require_text(&format!("{base}.text"), &quote.text);
                self.require_text(&format!("{base}.attribution"), &quote.attribution);
                self.validate_cards(base, &quote.cards);
            }
            Section::Sources(sources) => {
                if sources.sources.is_empty() {
                    self.add_error(&format!("{base}.sources"), "at least one source is required");
                }
                for (idx, source) in sources.sources.iter().enumerate() {
                    let s_path = format!("{base}.sources[{idx}]");
                    self.require_text(&format!("{s_path}.label"), &source.label);
                    if source.link().is_none() {
                        self.add_warning(&s_path, "source has no URL and renders as plain text");
                    }
                }
            }
            Section::CallToAction(cta) => {
                self.require_text(&format!("{base}.body"), &cta.body);
                if cta.links.is_empty() {
                    self.add_warning(&format!("{base}.links"), "call to action has no links");
                }
                for (idx, link) in cta.links.iter().enumerate() {
                    self.validate_link(&format!("{base}.links[{idx}]"), link);
                }
            }
        }
    }

    fn validate_cards(&mut self, base: &str, cards: &[Card]) {
        for (idx, card) in cards.iter().enumerate() {
            let c_base = format!("{base}.cards[{idx}]");
            self.require_text(&format!("{c_base}.title"), &card.title);
            if card.body.is_none() && card.items.is_empty() {
                self.add_error(&c_base, "card needs a body or items");
            }
            if let Some(ref body) = card.body {
                self.require_text(&format!("{c_base}.body"), body);
            }
            self.require_each(&format!("{c_base}.items"), &card.items);
            self.validate_accent(&format!("{c_base}.accent"), card.accent.as_deref());
            self.validate_detail(&format!("{c_base}.detail"), card.detail.as_ref());
        }
    }

    fn validate_detail(&mut self, path: &str, detail: Option<&Detail>) {
        if detail.is_some_and(Detail::is_blank) {
            self.add_error(path, "detail is empty; remove it or add text");
        }
    }

    fn validate_accent(&mut self, path: &str, accent: Option<&str>) {
        let Some(token) = accent else {
            return;
        };
        if !TOKEN_NAME.is_match(token) {
            self.add_error(path, &format!("\"{token}\" is not a theme token name"));
        } else if !(is_default_token(token) || self.custom_tokens.contains(token)) {
            self.add_error(
                path,
                &format!("unknown theme token \"{token}\"; define it under theme:"),
            );
        }
    }

    fn validate_link(&mut self, path: &str, link: &Link) {
        self.require_text(&format!("{path}.label"), &link.label);
        if link.href.trim().is_empty() {
            self.add_error(&format!("{path}.href"), "href is empty");
        } else if !(link.href.starts_with('/') || link.is_external() || link.href.starts_with('#'))
        {
            self.add_warning(
                &format!("{path}.href"),
                "href is neither a site path nor an absolute URL",
            );
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn require_text(&mut self, path: &str, value: &str) {
        if value.trim().is_empty() {
            self.add_error(path, "value is required and cannot be empty");
        }
    }

    fn require_each(&mut self, path: &str, values: &[String]) {
        for (idx, value) in values.iter().enumerate() {
            if value.trim().is_empty() {
                self.add_error(&format!("{path}[{idx}]"), "entry is empty");
            }
        }
    }

    fn add_error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            level: IssueLevel::Error,
        });
    }

    fn add_warning(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            level: IssueLevel::Warning,
        });
    }
}
