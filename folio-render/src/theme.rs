//! Theme tokens injected into every page.
//!
//! Components never hard-code colors. They reference tokens by name through
//! `var(--name)` and the document emits the resolved map once as a `:root`
//! rule.

use indexmap::IndexMap;

use folio_core::config::{DEFAULT_TOKENS, Severity};


/// Ordered mapping from token name to CSS value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeTokens {
    tokens: IndexMap<String, String>,
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self {
            tokens: DEFAULT_TOKENS
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }
}

impl ThemeTokens {
    /// Default tokens with `overrides` applied on top.
    ///
    /// New names are appended after the defaults in the order given.
    #[must_use]
    pub fn with_overrides(overrides: &IndexMap<String, String>) -> Self {
        let mut theme = Self::default();
        theme.merge(overrides);
        theme
    }

    /// Applies `overrides` in place.
    pub fn merge(&mut self, overrides: &IndexMap<String, String>) {
        for (name, value) in overrides {
            self.tokens.insert(name.clone(), value.trim().to_string());
        }
    }

    /// Returns the value of a token.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.tokens.get(name).map(String::as_str)
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if there are no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Emits the tokens as a `:root` rule.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.tokens {
            css.push_str("  --");
            css.push_str(name);
            css.push_str(": ");
            css.push_str(value);
            css.push_str(";\n");
        }
        css.push('}');
        css
    }
}

/// CSS reference to a token.
#[must_use]
pub fn var(name: &str) -> String {
    format!("var(--{name})")
}

/// Token carrying a severity's foreground color.
#[must_use]
pub fn severity_token(severity: Severity) -> String {
    format!("severity-{}", severity.as_str())
}
