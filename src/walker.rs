//! Filesystem walker for enumerating disc tree contents.

use crate::error::ManifestError;
use std::io;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Walker configuration.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false for determinism)
    pub follow_symlinks: bool,
    /// Path components to skip entirely (default: none; every file of a
    /// disc tree belongs in the manifest)
    pub ignore_patterns: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            ignore_patterns: Vec::new(),
            max_depth: None,
        }
    }
}

/// Recursive file enumerator.
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a walker for the given root path.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration.
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// List every regular file under the root.
    ///
    /// Returns paths sorted lexicographically so repeated runs visit files in
    /// the same order. Any enumeration failure aborts the walk; there is no
    /// meaningful manifest for a tree that cannot be listed.
    pub fn files(&self) -> Result<Vec<PathBuf>, ManifestError> {
        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX));

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| ManifestError::Walk {
                root: self.root.clone(),
                source: io::Error::new(io::ErrorKind::Other, e),
            })?;

            if self.should_ignore(entry.path()) {
                continue;
            }
            if entry.file_type().is_file() {
                files.push(entry.path().to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_ignore(&self, path: &std::path::Path) -> bool {
        if self.config.ignore_patterns.is_empty() {
            return false;
        }
        path.components().any(|component| {
            if let std::path::Component::Normal(name) = component {
                self.config
                    .ignore_patterns
                    .iter()
                    .any(|p| name.to_string_lossy() == p.as_str())
            } else {
                false
            }
        })
    }
}
