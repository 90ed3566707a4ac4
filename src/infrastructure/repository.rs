//! Manifest repository

use crate::domain::registry::Registry;
use crate::error::{Result, TagmetaError};
use crate::infrastructure::manifest::Manifest;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Manifest file name looked for during discovery
pub const MANIFEST_FILE: &str = "tagmeta.toml";

/// Abstract source of a loaded registry
pub trait RegistryRepository {
    /// Path of the manifest file or directory backing this repository
    fn manifest_path(&self) -> &Path;

    /// Load and validate the full registry
    fn load_registry(&self) -> Result<Registry>;
}

/// File system implementation of RegistryRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub manifest_path: PathBuf,
}

impl FileSystemRepository {
    /// Create a repository backed by a manifest file or directory
    pub fn new(manifest_path: PathBuf) -> Self {
        FileSystemRepository { manifest_path }
    }

    /// Discover the manifest, checking TAGMETA_MANIFEST first and then
    /// walking up from the current directory
    pub fn discover() -> Result<Self> {
        // 1. Check TAGMETA_MANIFEST environment variable first
        if let Ok(env_path) = std::env::var("TAGMETA_MANIFEST") {
            let path = PathBuf::from(env_path);
            if path.exists() {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(TagmetaError::Manifest(format!(
                    "TAGMETA_MANIFEST is set to '{}' but no such file exists. \
                    Create the manifest or unset TAGMETA_MANIFEST.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover a tagmeta.toml by walking up from a specific directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            let candidate = current.join(MANIFEST_FILE);
            if candidate.is_file() {
                return Ok(FileSystemRepository::new(candidate));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(TagmetaError::ManifestNotFound(start.to_path_buf()));
                }
            }
        }
    }

    /// Load the manifest: a single file, or every `*.toml` under a
    /// directory merged in path order
    pub fn load_manifest(&self) -> Result<Manifest> {
        if self.manifest_path.is_dir() {
            self.load_manifest_dir()
        } else {
            Self::parse_file(&self.manifest_path)
        }
    }

    fn load_manifest_dir(&self) -> Result<Manifest> {
        let mut files: Vec<PathBuf> = WalkDir::new(&self.manifest_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "toml"))
            .map(|entry| entry.into_path())
            .collect();
        // Path order keeps merging deterministic
        files.sort();

        let mut manifest = Manifest::default();
        for file in files {
            manifest.merge(Self::parse_file(&file)?);
        }
        Ok(manifest)
    }

    fn parse_file(path: &Path) -> Result<Manifest> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TagmetaError::ManifestNotFound(path.to_path_buf())
            } else {
                TagmetaError::Io(e)
            }
        })?;

        Manifest::parse(&contents).map_err(|e| {
            TagmetaError::Manifest(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}

impl RegistryRepository for FileSystemRepository {
    fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    fn load_registry(&self) -> Result<Registry> {
        self.load_manifest()?.into_registry()
    }
}
