//! Meta-tag lookup by target type
//!
//! Built on the traversal engine: runs a full traversal and filters by
//! tag-type identity, either from a resolved declaration or from a
//! qualified-name string.

use crate::domain::declaration::Declaration;
use crate::domain::meta::traversal::MetaTagResolver;
use crate::domain::registry::Registry;
use crate::domain::tag::Tag;
use crate::error::Result;

/// Finds tags of a requested type within a declaration's meta-tag closure.
///
/// # Examples
///
/// ```
/// use tagmeta::domain::meta::TagLookup;
/// use tagmeta::domain::{Declaration, DeclarationKind, Registry, Tag};
///
/// let mut registry = Registry::new();
/// let mut service = Declaration::new("svc.Service", DeclarationKind::Type).unwrap();
/// service.attach(Tag::new("meta.Inherited").unwrap());
/// registry.register(service).unwrap();
///
/// let lookup = TagLookup::new(&registry);
/// let decl = registry.resolve("svc.Service");
/// let found = lookup.find_first_named(decl, "meta.Inherited").unwrap();
/// assert!(found.is_some());
/// ```
pub struct TagLookup<'a> {
    registry: &'a Registry,
}

impl<'a> TagLookup<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        TagLookup { registry }
    }

    /// All meta-tags of `decl` whose type equals `target`, in traversal
    /// order.
    ///
    /// For any target other than the heritable marker the result has at
    /// most one element; callers must still handle the sequence shape.
    pub fn find_all(&self, decl: Option<&'a Declaration>, target: &Declaration) -> Vec<&'a Tag> {
        self.find_matching(decl, target.qualified_name())
    }

    /// The first meta-tag of `decl` with type `target`, or absent
    pub fn find_first(
        &self,
        decl: Option<&'a Declaration>,
        target: &Declaration,
    ) -> Option<&'a Tag> {
        self.find_all(decl, target).into_iter().next()
    }

    /// Name-based variant of `find_all`; fails if `target_name` does not
    /// resolve to a registered declaration
    pub fn find_all_named(
        &self,
        decl: Option<&'a Declaration>,
        target_name: &str,
    ) -> Result<Vec<&'a Tag>> {
        let target = self.registry.resolve_required(target_name)?;
        Ok(self.find_all(decl, target))
    }

    /// Name-based variant of `find_first`
    pub fn find_first_named(
        &self,
        decl: Option<&'a Declaration>,
        target_name: &str,
    ) -> Result<Option<&'a Tag>> {
        Ok(self.find_all_named(decl, target_name)?.into_iter().next())
    }

    fn find_matching(&self, decl: Option<&'a Declaration>, type_name: &str) -> Vec<&'a Tag> {
        MetaTagResolver::new(self.registry)
            .all_meta_tags(decl)
            .into_iter()
            .filter(|tag| tag.type_name() == type_name)
            .collect()
    }
}
