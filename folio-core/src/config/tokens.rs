//! Built-in theme tokens.
//!
//! Accents in the content file name a token; the name must resolve to one
//! of these defaults or to an entry of the `theme:` block.

/// Default token names and CSS values, in emission order.
pub const DEFAULT_TOKENS: &[(&str, &str)] = &[
    ("teal", "#0d9488"),
    ("gold", "#d4a017"),
    ("deep-purple", "#4c1d95"),
    ("text", "#1f2937"),
    ("muted", "#4b5563"),
    ("subtle", "#6b7280"),
    ("border", "#e5e7eb"),
    ("surface", "#ffffff"),
    ("surface-alt", "#f9fafb"),
    ("severity-critical", "#dc2626"),
    ("severity-critical-bg", "#fee2e2"),
    ("severity-high", "#d97706"),
    ("severity-high-bg", "#fef3c7"),
    ("severity-medium", "#6b7280"),
    ("severity-medium-bg", "#f3f4f6"),
    ("severity-low", "#2563eb"),
    ("severity-low-bg", "#dbeafe"),
];

/// Returns `true` if `name` is a built-in token.
#[must_use]
pub fn is_default_token(name: &str) -> bool {
    DEFAULT_TOKENS.iter().any(|(n, _)| *n == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names() {
        assert!(is_default_token("teal"));
        assert!(is_default_token("severity-low-bg"));
        assert!(!is_default_token("bleu"));
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = DEFAULT_TOKENS.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DEFAULT_TOKENS.len());
    }
}
