//! Manifest validation use case

use crate::domain::Registry;
use crate::error::Result;
use crate::infrastructure::repository::RegistryRepository;
use crate::infrastructure::FileSystemRepository;
use std::collections::BTreeSet;

/// Outcome of a manifest check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// All registered declarations, built-ins included
    pub declaration_count: usize,

    /// Tag type names referenced by some declaration but never declared
    pub unresolved_tag_types: Vec<String>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.unresolved_tag_types.is_empty()
    }
}

/// Collect tag type names that do not resolve to a declaration
fn collect_unresolved(registry: &Registry) -> Vec<String> {
    let mut unresolved = BTreeSet::new();
    for decl in registry.declarations() {
        for tag in decl.attached_tags() {
            if registry.resolve(tag.type_name()).is_none() {
                unresolved.insert(tag.type_name().to_string());
            }
        }
    }
    unresolved.into_iter().collect()
}

/// Service validating a manifest beyond what loading enforces
pub struct CheckManifestService {
    repository: FileSystemRepository,
}

impl CheckManifestService {
    /// Create a new check service
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Load the manifest and report unresolved tag types.
    ///
    /// An unresolved tag type is not an error: traversal emits such tags
    /// without descendants. The report surfaces them so manifest authors
    /// can spot typos.
    pub fn execute(&self) -> Result<CheckReport> {
        let registry = self.repository.load_registry()?;

        Ok(CheckReport {
            declaration_count: registry.len(),
            unresolved_tag_types: collect_unresolved(&registry),
        })
    }
}
