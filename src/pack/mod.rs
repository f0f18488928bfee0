//! Dependency cache packing operations module

mod archiver;
pub mod manifest;
mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::staging::stage_dependencies;

// Primary public API
pub use archiver::{create_archive, create_archive_with_progress};
pub use manifest::{DIRECTORIES_ENTRY, EmptyDirManifest, SYMLINKS_ENTRY, SymlinkManifest};
pub use types::{PackPhase, PackProgress, PackProgressCallback};

/// Name of the archive output directory created under the project root.
pub const ARCHIVE_DIR: &str = "cache_archive";

/// Name of the archive file written inside [`ARCHIVE_DIR`].
pub const ARCHIVE_FILE: &str = "cache.zip";

/// Result of a packing run
#[derive(Debug, Clone)]
pub struct PackSummary {
    /// Number of regular file entries written to the archive
    pub files_written: usize,
    /// Number of symlinks recorded in the symlink manifest
    pub symlinks_recorded: usize,
    /// Number of directories recorded in the empty-directory manifest
    pub empty_dirs_recorded: usize,
    /// Path of the finished archive
    pub archive_path: PathBuf,
}

/// Pack the dependency directories under `root` into
/// `root/cache_archive/cache.zip`.
///
/// See [`pack_dependencies_with_progress`] for details.
pub fn pack_dependencies(root: &Path) -> Result<PackSummary> {
    pack_dependencies_with_progress(root, &|_| {})
}

/// Pack the dependency directories under `root`, reporting progress
/// through `progress`.
///
/// Relocates the fixed source directories into a fresh staging root
/// (see [`crate::staging`]), creates the archive output directory, and
/// walks the staging root into the archive. All-or-nothing: the first
/// failed precondition or I/O error aborts the run, and a second run
/// without cleanup fails on the leftover staging root.
///
/// # Errors
///
/// Returns [`Error::OutputDirExists`] if `root/cache_archive` is left
/// over from a previous run, plus everything
/// [`crate::staging::stage_dependencies`] and [`create_archive`] can
/// return.
pub fn pack_dependencies_with_progress(
    root: &Path,
    progress: PackProgressCallback,
) -> Result<PackSummary> {
    progress(&PackProgress::new(PackPhase::Relocating, 0, 0));
    let staging_root = stage_dependencies(root)?;

    let archive_dir = root.join(ARCHIVE_DIR);
    if archive_dir.exists() {
        return Err(Error::OutputDirExists { path: archive_dir });
    }
    fs::create_dir(&archive_dir)?;

    let archive_path = archive_dir.join(ARCHIVE_FILE);
    let summary = create_archive_with_progress(&staging_root, &archive_path, progress)?;

    progress(&PackProgress::new(PackPhase::Complete, 1, 1));
    Ok(summary)
}
