//! `Folio` Core: content schema and configuration
//!
//! This crate provides the site content types, the YAML loader and the
//! validator shared across `folio` (CLI/server) and `folio-render`
//! (page composition).

pub mod config;
pub mod error;
pub mod slug;
