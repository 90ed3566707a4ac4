//! Tag instances and attribute values

use crate::domain::declaration::validate_qualified_name;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An attribute value carried by a tag: a scalar or a sequence of values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<AttrValue>),
}

impl std::fmt::Display for AttrValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttrValue::Boolean(b) => write!(f, "{}", b),
            AttrValue::Integer(i) => write!(f, "{}", i),
            AttrValue::Float(x) => write!(f, "{}", x),
            AttrValue::String(s) => write!(f, "\"{}\"", s),
            AttrValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// An attached metadata marker: a tag type plus attribute values.
///
/// Immutable once constructed. Tag identity is the tag type's qualified
/// name; two tags of the same type attached to different declarations are
/// distinct instances but equal in type.
///
/// # Examples
///
/// ```
/// use tagmeta::domain::{AttrValue, Tag};
///
/// let tag = Tag::new("svc.Service").unwrap()
///     .with_attribute("value", AttrValue::String("orders".to_string()));
/// assert_eq!(tag.type_name(), "svc.Service");
/// assert_eq!(tag.value(), Some(&AttrValue::String("orders".to_string())));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    type_name: String,
    attributes: BTreeMap<String, AttrValue>,
}

impl Tag {
    /// Create a tag with no attributes
    pub fn new(type_name: impl Into<String>) -> Result<Self> {
        let type_name = type_name.into();
        validate_qualified_name(&type_name)?;
        Ok(Tag {
            type_name,
            attributes: BTreeMap::new(),
        })
    }

    /// Create a tag carrying the given attribute map
    pub fn with_attributes(
        type_name: impl Into<String>,
        attributes: BTreeMap<String, AttrValue>,
    ) -> Result<Self> {
        let mut tag = Tag::new(type_name)?;
        tag.attributes = attributes;
        Ok(tag)
    }

    /// Add one attribute, consuming and returning the tag
    pub fn with_attribute(mut self, name: impl Into<String>, value: AttrValue) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Qualified name of this tag's type
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn attributes(&self) -> &BTreeMap<String, AttrValue> {
        &self.attributes
    }

    /// Look up a single attribute by name
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Shorthand for the conventional "value" attribute
    pub fn value(&self) -> Option<&AttrValue> {
        self.attribute("value")
    }

    /// Whether this tag and `other` are of the same tag type
    pub fn same_type(&self, other: &Tag) -> bool {
        self.type_name == other.type_name
    }
}
