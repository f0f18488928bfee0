//! Staging root creation and dependency relocation

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Name of the staging directory created under the project root.
pub const STAGING_DIR: &str = "cache";

/// Fixed relocation mapping: (source relative to the project root,
/// destination relative to the staging root).
///
/// Each move is destructive: after a successful run the source path no
/// longer exists at its original location.
pub const RELOCATIONS: [(&str, &str); 3] = [
    ("python-packages", "python-dependencies"),
    ("ts/server/node_modules", "server-dependencies"),
    ("ts/webui/node_modules", "webui-dependencies"),
];

/// Create the staging root under `root` and move each fixed source
/// directory into it.
///
/// All preconditions are validated before the first move: the staging
/// root must not exist yet, and every source must exist and be a
/// directory. A violation aborts without touching the filesystem; a
/// failure mid-move is propagated as-is with no rollback.
///
/// # Errors
///
/// Returns [`Error::StagingRootExists`] if a previous run left the
/// staging root behind, [`Error::SourceMissing`] /
/// [`Error::SourceNotADirectory`] for a bad source path, or
/// [`Error::Io`] if a move fails.
pub fn stage_dependencies(root: &Path) -> Result<PathBuf> {
    let staging_root = root.join(STAGING_DIR);
    if staging_root.exists() {
        return Err(Error::StagingRootExists { path: staging_root });
    }

    // Validate every source before moving anything
    for (source, _) in &RELOCATIONS {
        let source_path = root.join(source);
        if !source_path.exists() {
            return Err(Error::SourceMissing { path: source_path });
        }
        if !source_path.is_dir() {
            return Err(Error::SourceNotADirectory { path: source_path });
        }
    }

    fs::create_dir(&staging_root)?;

    for (source, destination) in &RELOCATIONS {
        let source_path = root.join(source);
        let destination_path = staging_root.join(destination);
        tracing::info!("Relocating {source_path:?} -> {destination_path:?}");
        fs::rename(&source_path, &destination_path)?;
    }

    Ok(staging_root)
}
