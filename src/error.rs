//! Error types for tagmeta

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tagmeta engine and its CLI host
#[derive(Debug, Error)]
pub enum TagmetaError {
    #[error("No manifest found from: {0}")]
    ManifestNotFound(PathBuf),

    #[error("Invalid qualified name: {0}")]
    InvalidQualifiedName(String),

    #[error("Declaration not found: {0}")]
    DeclarationNotFound(String),

    #[error("Duplicate declaration: {0}")]
    DuplicateDeclaration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl TagmetaError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagmetaError::ManifestNotFound(_) => 2,
            TagmetaError::InvalidQualifiedName(_) => 3,
            TagmetaError::DeclarationNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagmetaError::ManifestNotFound(path) => {
                format!(
                    "No manifest found from: {}\n\n\
                    Suggestions:\n\
                    • Create a tagmeta.toml in this directory or a parent\n\
                    • Pass an explicit path with --manifest <PATH>\n\
                    • Set TAGMETA_MANIFEST environment variable to your manifest path",
                    path.display()
                )
            }
            TagmetaError::InvalidQualifiedName(name) => {
                format!(
                    "Invalid qualified name: '{}'\n\n\
                    Qualified names are dot-separated identifiers:\n\
                    • Each segment starts with a letter or underscore\n\
                    • Segments contain only letters, digits, and underscores\n\n\
                    Examples:\n\
                    svc.Service\n\
                    app.orders.Endpoint",
                    name
                )
            }
            TagmetaError::DeclarationNotFound(name) => {
                format!(
                    "Declaration not found: '{}'\n\n\
                    Suggestions:\n\
                    • Check the spelling (names are case-sensitive)\n\
                    • Use 'tagmeta list' to see registered declarations\n\
                    • Built-in tag types live under the meta. namespace",
                    name
                )
            }
            TagmetaError::DuplicateDeclaration(name) => {
                format!(
                    "Duplicate declaration: '{}'\n\n\
                    Suggestions:\n\
                    • Each qualified name may be declared only once\n\
                    • Check all manifest files when loading a directory\n\
                    • The meta.* built-ins are pre-registered and cannot be redefined",
                    name
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagmetaError
pub type Result<T> = std::result::Result<T, TagmetaError>;
