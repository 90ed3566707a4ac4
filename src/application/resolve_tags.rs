//! Meta-tag resolution use case

use crate::domain::meta::MetaTagResolver;
use crate::domain::Tag;
use crate::error::Result;
use crate::infrastructure::repository::RegistryRepository;
use crate::infrastructure::FileSystemRepository;

/// Service resolving the full meta-tag closure of a declaration
pub struct ResolveTagsService {
    repository: FileSystemRepository,
}

impl ResolveTagsService {
    /// Create a new resolve service
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Execute resolution for the named declaration.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be loaded or `decl_name` is
    /// not a registered declaration.
    pub fn execute(&self, decl_name: &str) -> Result<Vec<Tag>> {
        let registry = self.repository.load_registry()?;
        let decl = registry.resolve_required(decl_name)?;

        let resolver = MetaTagResolver::new(&registry);
        let tags = resolver.all_meta_tags(Some(decl));

        Ok(tags.into_iter().cloned().collect())
    }
}
