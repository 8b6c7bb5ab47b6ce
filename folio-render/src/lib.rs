//! `Folio` Render: page composition from site content
//!
//! Turns a validated `SiteConfig` into a visual tree and HTML documents:
//! content-driven card sections, one independently stateful disclosure per
//! card, and a staggered reveal for top-level sections.

pub mod components;
pub mod disclosure;
pub mod document;
pub mod error;
pub mod escape;
pub mod node;
pub mod page;
pub mod reveal;
pub mod site;
pub mod theme;

pub use disclosure::{DisclosureKey, DisclosureState, DisclosureStates};
pub use error::RenderError;
pub use node::{Element, Node};
pub use page::{RenderContext, compose_page};
pub use reveal::{AnimationSpec, RevealPolicy, reveal};
pub use site::{RenderedPage, Site};
pub use theme::ThemeTokens;
