//! Symlink and empty-directory manifests
//!
//! ZIP archives only carry file entries, so symbolic links and
//! directories without files are diverted into two JSON manifests
//! stored as named entries inside the archive itself.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::error::Result;

/// Archive entry name for the symlink manifest.
pub const SYMLINKS_ENTRY: &str = "symlinks.json";

/// Archive entry name for the empty-directory manifest.
pub const DIRECTORIES_ENTRY: &str = "directories.json";

/// Records symbolic links as (archive-relative path, link target) pairs.
///
/// Serializes to a JSON object. Keys are kept sorted so that two runs
/// over an identical tree produce identical manifest bytes.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct SymlinkManifest {
    links: BTreeMap<String, String>,
}

impl SymlinkManifest {
    /// Create an empty manifest
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a symlink at `path` pointing to `target`
    pub fn record(&mut self, path: impl Into<String>, target: impl Into<String>) {
        self.links.insert(path.into(), target.into());
    }

    /// Number of recorded symlinks
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether no symlinks were recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Serialize to indented JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Tracks directories that have no enumerated descendants.
///
/// Directories are added tentatively during the sorted walk and removed
/// again as soon as any descendant is processed; only directories with
/// zero descendants survive into the serialized manifest (a JSON array
/// of paths, sorted).
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct EmptyDirManifest {
    dirs: BTreeSet<String>,
}

impl EmptyDirManifest {
    /// Create an empty manifest
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tentatively add a directory path
    pub fn add(&mut self, path: impl Into<String>) {
        self.dirs.insert(path.into());
    }

    /// Remove a path from the candidate set (no-op if absent)
    pub fn discard(&mut self, path: &str) {
        self.dirs.remove(path);
    }

    /// Whether the path is currently a candidate
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.dirs.contains(path)
    }

    /// Number of surviving candidates
    #[must_use]
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    /// Whether no candidates survive
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Serialize to indented JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_symlink_manifest_json() {
        let mut manifest = SymlinkManifest::new();
        manifest.record("a/link", "/etc/passwd");
        manifest.record("b/other", "../target");

        let json: serde_json::Value = serde_json::from_str(&manifest.to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "a/link": "/etc/passwd",
                "b/other": "../target",
            })
        );
    }

    #[test]
    fn test_empty_dir_bookkeeping() {
        let mut manifest = EmptyDirManifest::new();
        manifest.add("a");
        manifest.add("a/b");
        // Visiting a/b clears its parent
        manifest.discard("a");

        assert!(!manifest.contains("a"));
        assert!(manifest.contains("a/b"));
        assert_eq!(manifest.len(), 1);

        let json: serde_json::Value = serde_json::from_str(&manifest.to_json().unwrap()).unwrap();
        assert_eq!(json, serde_json::json!(["a/b"]));
    }

    #[test]
    fn test_discard_absent_path_is_noop() {
        let mut manifest = EmptyDirManifest::new();
        manifest.discard("never/added");
        assert!(manifest.is_empty());
    }
}
