//! Declaration listing use case

use crate::domain::DeclarationKind;
use crate::error::Result;
use crate::infrastructure::repository::RegistryRepository;
use crate::infrastructure::FileSystemRepository;

/// One row of `tagmeta list` output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationSummary {
    pub name: String,
    pub kind: DeclarationKind,
    pub tag_count: usize,
}

/// Service listing every registered declaration
pub struct ListDeclarationsService {
    repository: FileSystemRepository,
}

impl ListDeclarationsService {
    /// Create a new list service
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Execute the listing, ordered by qualified name.
    ///
    /// The `meta.*` built-ins are included.
    pub fn execute(&self) -> Result<Vec<DeclarationSummary>> {
        let registry = self.repository.load_registry()?;

        Ok(registry
            .declarations()
            .map(|decl| DeclarationSummary {
                name: decl.qualified_name().to_string(),
                kind: decl.kind(),
                tag_count: decl.attached_tags().len(),
            })
            .collect())
    }
}
