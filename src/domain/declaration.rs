//! Declarations and qualified names

use crate::domain::tag::Tag;
use crate::error::{Result, TagmetaError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Regex for qualified names: dot-separated identifier segments
fn qualified_name_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$").unwrap())
}

/// Check whether a string is a well-formed qualified name
pub fn is_valid_qualified_name(name: &str) -> bool {
    qualified_name_regex().is_match(name)
}

/// Validate a qualified name, returning it unchanged on success
pub fn validate_qualified_name(name: &str) -> Result<&str> {
    if is_valid_qualified_name(name) {
        Ok(name)
    } else {
        Err(TagmetaError::InvalidQualifiedName(name.to_string()))
    }
}

/// What sort of entity a declaration names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    #[default]
    Type,
    Method,
    Field,
    Function,
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DeclarationKind::Type => "type",
            DeclarationKind::Method => "method",
            DeclarationKind::Field => "field",
            DeclarationKind::Function => "function",
        };
        write!(f, "{}", s)
    }
}

/// A named entity that may carry attached tags.
///
/// A tag *type* is itself a declaration, which is what makes the meta-tag
/// graph recursive: the tags attached to a tag type are that type's
/// meta-tags. The attached-tag sequence preserves declaration order and is
/// never re-sorted.
///
/// # Examples
///
/// ```
/// use tagmeta::domain::{Declaration, DeclarationKind, Tag};
///
/// let mut decl = Declaration::new("svc.Service", DeclarationKind::Type).unwrap();
/// decl.attach(Tag::new("meta.Inherited").unwrap());
/// assert_eq!(decl.attached_tags().len(), 1);
/// assert!(decl.is_type());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    name: String,
    kind: DeclarationKind,
    tags: Vec<Tag>,
}

impl Declaration {
    /// Create a declaration with no attached tags
    pub fn new(name: impl Into<String>, kind: DeclarationKind) -> Result<Self> {
        let name = name.into();
        validate_qualified_name(&name)?;
        Ok(Declaration {
            name,
            kind,
            tags: Vec::new(),
        })
    }

    /// Append a tag to the attached-tag sequence, preserving order
    pub fn attach(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    /// The stable qualified name identifying this declaration
    pub fn qualified_name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    /// Tags directly attached to this declaration, in declaration order
    pub fn attached_tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Whether this declaration names a type (as opposed to a member)
    pub fn is_type(&self) -> bool {
        self.kind == DeclarationKind::Type
    }
}

/// Type-classification predicate over a possibly absent declaration.
///
/// Absent input yields `false`, never an error.
pub fn is_type_declaration(decl: Option<&Declaration>) -> bool {
    decl.map(Declaration::is_type).unwrap_or(false)
}
