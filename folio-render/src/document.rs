//! HTML document shell.
//!
//! Wraps a composed page body in a full document: `<title>`, description
//! meta tag, theme tokens and the base stylesheet.

use folio_core::config::{Page, SiteConfig, SiteMetadata};
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::node::Node;
use crate::theme::ThemeTokens;

/// Stylesheet shared by every page. Colors come from theme tokens.
pub const BASE_CSS: &str = r"
*, *::before, *::after { box-sizing: border-box; }
body {
  margin: 0;
  font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
  line-height: 1.6;
  color: var(--text);
  background: var(--surface);
}
.page { max-width: 56rem; margin: 0 auto; padding: 3rem 1rem; }
.page-header { margin-bottom: 3rem; }
.page-header h1 { font-size: 2.25rem; margin: 0 0 0.5rem; }
.back-link { color: var(--teal); font-size: 0.875rem; text-decoration: none; }
.byline { color: var(--subtle); font-size: 0.875rem; }
.subtitle { color: var(--muted); font-size: 1.25rem; }
section { margin-bottom: 3rem; }
.section-heading { font-size: 1.5rem; margin: 0 0 1rem; }
p, li { color: var(--muted); }

.reveal {
  opacity: 0;
  animation: reveal var(--reveal-duration, 500ms) ease-out var(--reveal-delay, 0ms) forwards;
}
@keyframes reveal {
  from { opacity: 0; transform: translateY(var(--reveal-offset, 20px)); }
  to { opacity: 1; transform: translateY(0); }
}
@media (prefers-reduced-motion: reduce) {
  .reveal { opacity: 1; animation: none; }
}

.card {
  border: 1px solid var(--border);
  border-left: 4px solid var(--accent, var(--teal));
  border-radius: 0.5rem;
  padding: 1rem 1.25rem;
  margin-bottom: 1rem;
  background: var(--surface);
}
.card-title { color: var(--accent, var(--text)); margin: 0 0 0.5rem; font-size: 1rem; }
.callout .emphasis { font-size: 1.125rem; font-weight: 600; color: var(--text); }
.grid { display: grid; gap: 1rem; grid-template-columns: repeat(var(--columns, 3), minmax(0, 1fr)); }
@media (max-width: 48rem) { .grid { grid-template-columns: 1fr; } }
.note { border-left: 4px solid var(--gold); padding-left: 1rem; }

.bucket { margin-bottom: 2rem; }
.bucket-header { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 1rem; }
.pill, .badge {
  padding: 0.25rem 0.75rem;
  border-radius: 999px;
  font-size: 0.875rem;
  font-weight: 600;
  color: var(--accent);
  border: 1px solid var(--accent);
}
.bucket-description { color: var(--subtle); font-size: 0.875rem; }
.phase-header { display: flex; align-items: center; gap: 0.5rem; }
.phase-header h3 { margin: 0; }

.disclosure {
  margin-top: 0.75rem;
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  overflow: hidden;
}
.disclosure-toggle {
  display: block;
  padding: 0.5rem 1rem;
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--muted);
  background: var(--surface-alt);
  text-decoration: none;
}
.disclosure-body {
  padding: 1rem;
  font-size: 0.875rem;
  border-top: 1px solid var(--border);
}

.quote p { font-size: 1.25rem; font-style: italic; color: var(--deep-purple); }
.sources a { color: var(--teal); }
.links { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; }
.button {
  padding: 0.5rem 1.5rem;
  border: 1px solid var(--teal);
  border-radius: 0.375rem;
  color: var(--teal);
  text-decoration: none;
}
.button.primary { background: var(--deep-purple); border-color: var(--deep-purple); color: #fff; }
.listing a { color: var(--teal); font-weight: 600; }
";

fn head(title: &str, description: &str, theme: &ThemeTokens) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            title { (title) }
            meta name="description" content=(description);
            style { (PreEscaped(theme.to_css())) (PreEscaped(BASE_CSS)) }
        }
    }
}

/// Renders a full HTML document for `page` around its composed `body`.
#[must_use]
pub fn render_document(
    page: &Page,
    site: &SiteMetadata,
    theme: &ThemeTokens,
    body: &Node,
) -> String {
    let title = format!("{} | {}", page.title, site.name);
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(&title, &page.description, theme))
            body {
                (PreEscaped(body.render_html()))
            }
        }
    }
    .into_string()
}

/// Renders the page listing served at `/`.
#[must_use]
pub fn render_index(config: &SiteConfig, theme: &ThemeTokens) -> String {
    let description = format!("Pages on {}", config.site.name);
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(&config.site.name, &description, theme))
            body {
                main.page {
                    header.page-header {
                        h1 { (config.site.name) }
                        @if let Some(author) = &config.site.author {
                            p.byline { (author) }
                        }
                    }
                    ul.listing {
                        @for page in &config.pages {
                            li {
                                a href={ "/" (page.slug) } { (page.title) }
                                p { (page.description) }
                            }
                        }
                    }
                }
            }
        }
    }
    .into_string()
}
