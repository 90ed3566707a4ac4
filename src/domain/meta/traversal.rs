//! Transitive meta-tag traversal
//!
//! Resolves the tags attached to a declaration into the full set of tags
//! those tags are themselves tagged with, by walking the tag-type graph
//! depth-first in preorder. A meta-tag chain is typically linear, so
//! preorder yields the innermost annotation context first, level by level.

use crate::domain::declaration::Declaration;
use crate::domain::meta::structural;
use crate::domain::registry::Registry;
use crate::domain::tag::Tag;
use std::collections::HashSet;

/// Depth-first, cycle-safe walker over the tag-type graph.
///
/// Pure and read-only: each call keeps its visited set on the stack, so one
/// resolver (or one registry) may be shared freely across threads.
///
/// # Examples
///
/// ```
/// use tagmeta::domain::meta::MetaTagResolver;
/// use tagmeta::domain::{Declaration, DeclarationKind, Registry, Tag};
///
/// let mut registry = Registry::new();
/// let mut service = Declaration::new("svc.Service", DeclarationKind::Type).unwrap();
/// service.attach(Tag::new("meta.Inherited").unwrap());
/// registry.register(service).unwrap();
///
/// let resolver = MetaTagResolver::new(&registry);
/// let decl = registry.resolve("svc.Service");
/// let tags = resolver.all_meta_tags(decl);
/// assert_eq!(tags.len(), 1);
/// assert_eq!(tags[0].type_name(), "meta.Inherited");
/// ```
pub struct MetaTagResolver<'a> {
    registry: &'a Registry,
}

impl<'a> MetaTagResolver<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        MetaTagResolver { registry }
    }

    /// All semantically meaningful tags reachable from `decl`, in
    /// depth-first preorder.
    ///
    /// Structural tag types never appear in the output. Every ordinary tag
    /// type contributes at most one instance per traversal, even when
    /// reachable via multiple paths; the heritable marker is emitted once
    /// per level it is attached at. Absent input yields an empty sequence.
    pub fn all_meta_tags(&self, decl: Option<&'a Declaration>) -> Vec<&'a Tag> {
        let mut result = Vec::new();
        let mut visited = HashSet::new();

        if let Some(decl) = decl {
            self.visit(decl.attached_tags(), &mut visited, &mut result);
        }

        result
    }

    /// Non-structural tags directly attached to `decl`, without recursion
    pub fn direct_meta_tags(&self, decl: Option<&'a Declaration>) -> Vec<&'a Tag> {
        match decl {
            Some(decl) => decl
                .attached_tags()
                .iter()
                .filter(|tag| !structural::is_structural(tag.type_name()))
                .collect(),
            None => Vec::new(),
        }
    }

    fn visit(
        &self,
        tags: &'a [Tag],
        visited: &mut HashSet<String>,
        result: &mut Vec<&'a Tag>,
    ) {
        for tag in tags {
            let type_name = tag.type_name();
            if structural::is_structural(type_name) {
                continue;
            }

            let first_visit = visited.insert(type_name.to_string());
            // A chain attaches the heritable marker at every level; each
            // instance is emitted. Any other already-visited type is a
            // cycle or repeated reference and is skipped entirely.
            if !first_visit && !structural::is_heritable(type_name) {
                continue;
            }

            result.push(tag);

            // Descend into the tag type's own attached tags at most once
            // per type, which bounds the walk by the number of distinct
            // reachable types.
            if first_visit {
                if let Some(type_decl) = self.registry.resolve(type_name) {
                    self.visit(type_decl.attached_tags(), visited, result);
                }
            }
        }
    }
}
