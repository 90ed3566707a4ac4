//! tagmeta - Declarative tag resolution engine
//!
//! A library engine that resolves the tags attached to a declaration into
//! the transitive set of tags those tags are themselves tagged with,
//! walking the tag-type graph depth-first with cycle protection. Ships
//! with a small CLI host that loads declarations from TOML manifests.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TagmetaError;
