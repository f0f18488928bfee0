//! Archive construction from a staging root
//!
//! Walks the staging tree in sorted order and partitions every entry
//! into one of three categories: regular files become deflate-compressed
//! ZIP entries, symbolic links are diverted into the symlink manifest,
//! and directories are tracked as empty-directory candidates until a
//! descendant is seen.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use walkdir::{DirEntry, WalkDir};
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::error::{Error, Result};

use super::PackSummary;
use super::manifest::{DIRECTORIES_ENTRY, EmptyDirManifest, SYMLINKS_ENTRY, SymlinkManifest};
use super::types::{PackPhase, PackProgress, PackProgressCallback};

/// Deflate level for regular file entries.
const FILE_COMPRESSION_LEVEL: i64 = 9;

/// Create `archive_path` from the contents of `staging_root`.
///
/// See [`create_archive_with_progress`] for details.
pub fn create_archive(staging_root: &Path, archive_path: &Path) -> Result<PackSummary> {
    create_archive_with_progress(staging_root, archive_path, &|_| {})
}

/// Create `archive_path` from the contents of `staging_root`, reporting
/// progress through `progress`.
///
/// The walk is depth-first with siblings sorted by file name, so every
/// directory is visited before its children and the archive content is
/// deterministic for a given tree. After the walk the two manifests are
/// written as indented JSON under [`SYMLINKS_ENTRY`] and
/// [`DIRECTORIES_ENTRY`], and the writer is finalized.
///
/// # Errors
///
/// Fails if the traversal errors, if a path is not valid UTF-8, or on
/// any I/O or ZIP write failure. A failure mid-write can leave a
/// partial archive file behind; nothing attempts to clean it up.
pub fn create_archive_with_progress(
    staging_root: &Path,
    archive_path: &Path,
    progress: PackProgressCallback,
) -> Result<PackSummary> {
    tracing::info!("Scanning staging root: {staging_root:?}");
    progress(&PackProgress::new(PackPhase::Scanning, 0, 0));

    let mut entries = Vec::new();
    for entry in WalkDir::new(staging_root).min_depth(1).sort_by_file_name() {
        entries.push(entry?);
    }

    tracing::info!("Found {} entries, creating archive", entries.len());

    let file = File::create(archive_path)?;
    let mut zip = ZipWriter::new(file);
    let file_options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(FILE_COMPRESSION_LEVEL));

    let mut symlinks = SymlinkManifest::new();
    let mut empty_dirs = EmptyDirManifest::new();
    let total = entries.len();
    let mut files_written = 0;

    for (index, entry) in entries.iter().enumerate() {
        let name = entry_name(staging_root, entry.path())?;
        if reports_progress(entry) {
            tracing::info!("Compress {name}");
        }
        progress(&PackProgress::with_file(
            PackPhase::Compressing,
            index + 1,
            total,
            name.clone(),
        ));

        let file_type = entry.file_type();
        if file_type.is_symlink() {
            let target = std::fs::read_link(entry.path())?;
            symlinks.record(&name, path_to_string(&target)?);
        } else if file_type.is_dir() {
            // Tentative: cleared again once any descendant is visited
            empty_dirs.add(&name);
        } else {
            zip.start_file(name.as_str(), file_options)?;
            let mut source = File::open(entry.path())?;
            io::copy(&mut source, &mut zip)?;
            files_written += 1;
        }

        if let Some(parent) = parent_of(&name) {
            empty_dirs.discard(parent);
        }
    }

    progress(&PackProgress::new(PackPhase::WritingManifests, total, total));
    zip.start_file(SYMLINKS_ENTRY, SimpleFileOptions::default())?;
    zip.write_all(symlinks.to_json()?.as_bytes())?;
    zip.start_file(DIRECTORIES_ENTRY, SimpleFileOptions::default())?;
    zip.write_all(empty_dirs.to_json()?.as_bytes())?;
    zip.finish()?;

    tracing::info!(
        "Archive created: {} files, {} symlinks, {} empty directories",
        files_written,
        symlinks.len(),
        empty_dirs.len()
    );

    Ok(PackSummary {
        files_written,
        symlinks_recorded: symlinks.len(),
        empty_dirs_recorded: empty_dirs.len(),
        archive_path: archive_path.to_path_buf(),
    })
}

/// Archive entry name for a path under the staging root.
fn entry_name(staging_root: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(staging_root)
        .map_err(|e| Error::InvalidPath(format!("{e}")))?;
    let name = relative
        .to_str()
        .ok_or_else(|| Error::InvalidPath(format!("non-UTF-8 path: {}", relative.display())))?;
    Ok(name.replace('\\', "/"))
}

/// Immediate parent of an archive entry name, if it has one.
fn parent_of(name: &str) -> Option<&str> {
    name.rsplit_once('/').map(|(parent, _)| parent)
}

/// Whether this entry gets an informational progress line: children of
/// top-level staging entries, plus anything directly under a
/// `site-packages` directory.
fn reports_progress(entry: &DirEntry) -> bool {
    entry.depth() == 2
        || entry
            .path()
            .parent()
            .and_then(Path::file_name)
            .is_some_and(|name| name == "site-packages")
}

fn path_to_string(path: &Path) -> Result<String> {
    path.to_str()
        .map(str::to_owned)
        .ok_or_else(|| Error::InvalidPath(format!("non-UTF-8 link target: {}", path.display())))
}
