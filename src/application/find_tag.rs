//! Meta-tag lookup use case

use crate::domain::meta::TagLookup;
use crate::domain::Tag;
use crate::error::Result;
use crate::infrastructure::repository::RegistryRepository;
use crate::infrastructure::FileSystemRepository;

/// Service finding meta-tags of a requested type on a declaration
pub struct FindTagService {
    repository: FileSystemRepository,
}

impl FindTagService {
    /// Create a new find service
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Find meta-tags of type `type_name` on `decl_name`.
    ///
    /// Returns only the first match unless `all` is set; the sequence is
    /// empty when the declaration carries no tag of that type.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be loaded, or if either
    /// `decl_name` or `type_name` is not a registered declaration.
    pub fn execute(&self, decl_name: &str, type_name: &str, all: bool) -> Result<Vec<Tag>> {
        let registry = self.repository.load_registry()?;
        let decl = registry.resolve_required(decl_name)?;

        let lookup = TagLookup::new(&registry);
        let found = lookup.find_all_named(Some(decl), type_name)?;

        let limit = if all { found.len() } else { 1 };
        Ok(found.into_iter().take(limit).cloned().collect())
    }
}
