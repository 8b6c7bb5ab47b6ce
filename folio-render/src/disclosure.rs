//! Expand/collapse disclosures.
//!
//! Each disclosure is a two-state machine owned by one content instance.
//! Instances are addressed by [`DisclosureKey`], built from content slugs, so
//! the state of one card never leaks into another when lists are reordered.
//!
//! Pages are rendered statelessly: the set of expanded keys travels in the
//! `open=` query parameter, and each toggle control links to the same page
//! with only its own key flipped.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;

use crate::node::{Node, el};

/// Default label on a disclosure control.
pub const DEFAULT_LABEL: &str = "Technical Detail";

/// Name of the query parameter that carries expanded keys.
pub const OPEN_PARAM: &str = "open";

// ============================================================================
// State Machine
// ============================================================================

/// State of a single disclosure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisclosureState {
    /// Child block absent
    #[default]
    Collapsed,
    /// Child block rendered once after the control
    Expanded,
}

impl DisclosureState {
    /// Flips the state in place.
    pub const fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Returns the opposite state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    /// Returns `true` when expanded.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Expanded)
    }

    /// Glyph shown after the control label.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Collapsed => "▸",
            Self::Expanded => "▾",
        }
    }

    /// Lowercase name, used for `data-state`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Collapsed => "collapsed",
            Self::Expanded => "expanded",
        }
    }
}

/// Stable content-identity key of a disclosure instance.
///
/// Keys look like `risk-matrix/high/shadow-ai-risk`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DisclosureKey(pub String);

impl DisclosureKey {
    /// Creates a key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DisclosureKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DisclosureKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for DisclosureKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

// ============================================================================
// Keyed Collection
// ============================================================================

/// Disclosure states for one page, keyed by content identity.
///
/// Unknown keys read as [`DisclosureState::Collapsed`]. Only expanded keys
/// are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisclosureStates {
    states: IndexMap<DisclosureKey, DisclosureState>,
}

impl DisclosureStates {
    /// Creates an empty collection where everything is collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state of `key`.
    #[must_use]
    pub fn get(&self, key: &DisclosureKey) -> DisclosureState {
        self.states.get(key).copied().unwrap_or_default()
    }

    /// Returns `true` if `key` is expanded.
    #[must_use]
    pub fn is_open(&self, key: &DisclosureKey) -> bool {
        self.get(key).is_open()
    }

    /// Sets the state of `key`.
    pub fn set(&mut self, key: DisclosureKey, state: DisclosureState) {
        if state.is_open() {
            self.states.insert(key, state);
        } else {
            self.states.shift_remove(&key);
        }
    }

    /// Flips `key` and returns its new state.
    pub fn toggle(&mut self, key: &DisclosureKey) -> DisclosureState {
        let next = self.get(key).toggled();
        self.set(key.clone(), next);
        next
    }

    /// Returns a copy with `key` flipped.
    #[must_use]
    pub fn with_toggled(&self, key: &DisclosureKey) -> Self {
        let mut next = self.clone();
        next.toggle(key);
        next
    }

    /// Drops state for instances that are no longer on the page.
    ///
    /// Returns the number of entries discarded.
    pub fn retain(&mut self, live: &HashSet<DisclosureKey>) -> usize {
        let before = self.states.len();
        self.states.retain(|key, _| live.contains(key));
        before - self.states.len()
    }

    /// Number of expanded instances.
    #[must_use]
    pub fn expanded_count(&self) -> usize {
        self.states.len()
    }

    /// Expanded keys in the order they were opened.
    pub fn expanded(&self) -> impl Iterator<Item = &DisclosureKey> {
        self.states.keys()
    }

    /// Parses the value of the `open=` query parameter.
    ///
    /// Keys are comma-separated. Blank entries are ignored and duplicates
    /// collapse to one.
    #[must_use]
    pub fn from_query(value: &str) -> Self {
        let mut states = Self::new();
        for key in value.split(',').map(str::trim).filter(|k| !k.is_empty()) {
            states.set(DisclosureKey::new(key), DisclosureState::Expanded);
        }
        states
    }

    /// Builds from a list of keys, as given by repeated `--open` flags.
    #[must_use]
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<DisclosureKey>,
    {
        let mut states = Self::new();
        for key in keys {
            states.set(key.into(), DisclosureState::Expanded);
        }
        states
    }

    /// Serializes to the value of the `open=` query parameter.
    ///
    /// Returns `None` when nothing is expanded.
    #[must_use]
    pub fn to_query(&self) -> Option<String> {
        if self.states.is_empty() {
            return None;
        }
        Some(
            self.states
                .keys()
                .map(DisclosureKey::as_str)
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// DOM id of a disclosure instance.
#[must_use]
pub fn anchor_id(key: &DisclosureKey) -> String {
    format!("detail-{key}")
}

/// Renders one disclosure.
///
/// The control always renders. `child` is only called, and its node only
/// attached, when `state` is expanded.
pub fn render_disclosure(
    key: &DisclosureKey,
    label: &str,
    state: DisclosureState,
    toggle_href: &str,
    child: impl FnOnce() -> Node,
) -> Node {
    let control = el("a")
        .class("disclosure-toggle")
        .attr("href", toggle_href)
        .attr("aria-expanded", state.is_open().to_string())
        .child(el("span").text(format!("{label} {}", state.glyph())));

    let mut wrapper = el("div")
        .class("disclosure")
        .attr("id", anchor_id(key))
        .attr("data-key", key.as_str())
        .attr("data-state", state.as_str())
        .child(control);

    if state.is_open() {
        wrapper = wrapper.child(el("div").class("disclosure-body").child(child()));
    }

    wrapper.into()
}
