//! Slugs for page paths and content identity keys.
//!
//! Titles and headings in the content file are free-form strings. Disclosure
//! state is keyed by identity derived from them, so the same text must always
//! produce the same slug.

/// Slugify free-form text into a `[a-z0-9-]+` identifier.
///
/// # Rules
/// 1. Lowercase the entire string
/// 2. Replace spaces, underscores and slashes with dashes
/// 3. Strip any character not in `[a-z0-9-]`
/// 4. Collapse consecutive dashes
/// 5. Trim leading/trailing dashes
/// 6. If the result is empty, use `{fallback}-{index}`
#[must_use]
pub fn slugify(text: &str, fallback: &str, index: usize) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        match c {
            ' ' | '_' | '/' | '-' => {
                if !slug.ends_with('-') {
                    slug.push('-');
                }
            }
            c if c.is_ascii_alphanumeric() => slug.push(c),
            _ => {}
        }
    }

    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        format!("{fallback}-{index}")
    } else {
        trimmed.to_string()
    }
}

/// Returns `true` if `slug` is already in canonical form.
#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
