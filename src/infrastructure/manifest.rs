//! Declaration manifests
//!
//! A manifest is the static metadata description a host supplies: a TOML
//! document listing declarations and the tags attached to them. Parsing a
//! manifest and converting it into a registry is the only write path into
//! the metadata graph.

use crate::domain::declaration::{Declaration, DeclarationKind};
use crate::domain::registry::Registry;
use crate::domain::tag::{AttrValue, Tag};
use crate::error::Result;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Parsed manifest contents, not yet validated
#[derive(Debug, Deserialize, Default)]
pub struct Manifest {
    #[serde(default)]
    declaration: Vec<DeclarationSpec>,
}

#[derive(Debug, Deserialize)]
struct DeclarationSpec {
    name: String,
    #[serde(default)]
    kind: DeclarationKind,
    #[serde(default)]
    tag: Vec<TagSpec>,
}

#[derive(Debug, Deserialize)]
struct TagSpec {
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default)]
    attributes: BTreeMap<String, AttrValue>,
}

impl Manifest {
    /// Parse manifest TOML
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Append all declarations of `other`, preserving order
    pub fn merge(&mut self, other: Manifest) {
        self.declaration.extend(other.declaration);
    }

    pub fn declaration_count(&self) -> usize {
        self.declaration.len()
    }

    /// Validate every name and build the registry.
    ///
    /// Rejects malformed qualified names, duplicate declarations, and
    /// redefinition of the pre-registered `meta.*` built-ins.
    pub fn into_registry(self) -> Result<Registry> {
        let mut registry = Registry::new();

        for spec in self.declaration {
            let mut decl = Declaration::new(spec.name, spec.kind)?;
            for tag_spec in spec.tag {
                decl.attach(Tag::with_attributes(
                    tag_spec.type_name,
                    tag_spec.attributes,
                )?);
            }
            registry.register(decl)?;
        }

        Ok(registry)
    }
}
