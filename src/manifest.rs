//! Manifest generation: walk, classify, digest.
//!
//! The pipeline is strictly sequential: one file at a time, each iteration
//! owning its reader and digest state. Cancellation is cooperative and polled
//! only at the per-file boundary, so an in-flight digest always completes
//! before the builder stops.

use crate::digest;
use crate::error::ManifestError;
use crate::split::{self, SplitReader};
use crate::walker::{Walker, WalkerConfig};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// Marker rendered in place of a digest when a file could not be read.
pub const ERROR_MARKER: &str = "ERROR";

/// Digest outcome for one manifest entry.
///
/// A tagged result rather than a magic string: callers distinguish "digest
/// computed" from "digest failed" by the variant, and only the text rendering
/// collapses failures to the `ERROR` marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EntryDigest {
    #[serde(rename = "sha1")]
    Sha1(String),
    #[serde(rename = "error")]
    Error(String),
}

impl EntryDigest {
    pub fn is_error(&self) -> bool {
        matches!(self, EntryDigest::Error(_))
    }
}

impl fmt::Display for EntryDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryDigest::Sha1(hex) => f.write_str(hex),
            EntryDigest::Error(_) => f.write_str(ERROR_MARKER),
        }
    }
}

/// One logical file in the manifest: root-relative path and digest outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub path: PathBuf,
    #[serde(flatten)]
    pub digest: EntryDigest,
}

/// Ordered manifest for one build run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    /// Entries in traversal order.
    pub entries: Vec<ManifestEntry>,
    /// Whether the build stopped early on the cancellation signal. A
    /// cancelled manifest is a valid partial result, not an error.
    pub cancelled: bool,
}

impl Manifest {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cooperative cancellation signal.
///
/// Cloned into whatever context wants to stop the build (a signal handler, a
/// UI thread); the builder polls it before each file.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Takes effect at the next per-file boundary.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Builds the integrity manifest for a disc tree.
pub struct ManifestBuilder {
    root: PathBuf,
    config: WalkerConfig,
}

impl ManifestBuilder {
    /// Create a builder for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a builder with custom walker configuration.
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the root and digest every logical file.
    ///
    /// A name carrying the first-part suffix is digested as the reassembled
    /// stream of its sequence and keyed by the suffix-stripped base; every
    /// other file, later part files included, is digested directly under its
    /// own name. Per-file read failures become `EntryDigest::Error` entries;
    /// only a root that cannot be enumerated fails the build.
    ///
    /// `on_progress` fires once per produced entry with (processed, total).
    pub fn build(
        &self,
        cancel: &CancelFlag,
        mut on_progress: impl FnMut(usize, usize),
    ) -> Result<Manifest, ManifestError> {
        let files = Walker::with_config(self.root.clone(), self.config.clone()).files()?;
        let total = files.len();
        debug!(root = %self.root.display(), total, "manifest build started");

        let mut entries = Vec::with_capacity(total);
        let mut cancelled = false;

        for (index, file) in files.iter().enumerate() {
            if cancel.is_cancelled() {
                debug!(processed = entries.len(), "manifest build cancelled");
                cancelled = true;
                break;
            }

            let (logical_path, result) = match split::strip_part_suffix(file) {
                Some(base) => {
                    let digest = digest::sha1_hex(SplitReader::open(&base));
                    (base, digest)
                }
                None => (file.clone(), digest::sha1_file(file)),
            };

            let digest = match result {
                Ok(hex) => EntryDigest::Sha1(hex),
                Err(e) => {
                    warn!(path = %logical_path.display(), error = %e, "digest failed");
                    EntryDigest::Error(e.to_string())
                }
            };

            let path = logical_path
                .strip_prefix(&self.root)
                .map(PathBuf::from)
                .unwrap_or(logical_path);
            entries.push(ManifestEntry { path, digest });
            on_progress(index + 1, total);
        }

        Ok(Manifest { entries, cancelled })
    }
}
