//! Declaration registry
//!
//! The registry is the in-process metadata facility: it owns every
//! declaration, keyed by qualified name, and resolves tag type names during
//! traversal. It is populated once (programmatically or from a manifest)
//! and read-only afterwards, so shared references can be used from any
//! number of threads.

use crate::domain::declaration::{Declaration, DeclarationKind};
use crate::domain::meta::structural;
use crate::error::{Result, TagmetaError};
use std::collections::BTreeMap;

/// Owns all declarations; identity is the interned qualified name
#[derive(Debug, Clone)]
pub struct Registry {
    decls: BTreeMap<String, Declaration>,
}

impl Registry {
    /// Create a registry with the `meta.*` built-ins pre-registered
    pub fn new() -> Self {
        let mut decls = BTreeMap::new();
        for name in structural::BUILTIN_TYPES {
            // Built-in names are valid by construction
            let decl = Declaration::new(name, DeclarationKind::Type).unwrap();
            decls.insert(name.to_string(), decl);
        }
        Registry { decls }
    }

    /// Register a declaration, rejecting duplicate qualified names
    pub fn register(&mut self, decl: Declaration) -> Result<()> {
        use std::collections::btree_map::Entry;

        match self.decls.entry(decl.qualified_name().to_string()) {
            Entry::Vacant(e) => {
                e.insert(decl);
                Ok(())
            }
            Entry::Occupied(e) => Err(TagmetaError::DuplicateDeclaration(e.key().clone())),
        }
    }

    /// Resolve a qualified name to its declaration
    pub fn resolve(&self, name: &str) -> Option<&Declaration> {
        self.decls.get(name)
    }

    /// Like `resolve`, but surfaces a NotFound error for the caller
    pub fn resolve_required(&self, name: &str) -> Result<&Declaration> {
        self.resolve(name)
            .ok_or_else(|| TagmetaError::DeclarationNotFound(name.to_string()))
    }

    /// Iterator over all declarations, ordered by qualified name
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.decls.values()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
