//! `Folio` - portfolio site renderer
//!
//! Loads the site content, renders pages with content-driven card sections
//! and per-card disclosures, and hosts them as static files or over HTTP.

pub mod cli;
pub mod error;
pub mod observability;
pub mod server;
