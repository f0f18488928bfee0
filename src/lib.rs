//! # Cachepack
//!
//! A small tool that packages language dependency caches (a Python
//! package directory and two `node_modules` trees) into a single
//! deflate-compressed ZIP archive for restoration on another machine.
//!
//! ZIP archives cannot faithfully store symbolic links or empty
//! directories, so both are diverted into JSON manifests written as
//! named entries inside the same archive: `symlinks.json` maps each
//! link's relative path to its target string, and `directories.json`
//! lists directories with no file or symlink anywhere in their subtree.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! use cachepack::pack::pack_dependencies;
//!
//! // Relocates the dependency directories into `<root>/cache` and
//! // writes `<root>/cache_archive/cache.zip`.
//! let summary = pack_dependencies(Path::new("."))?;
//! println!(
//!     "{} files, {} symlinks, {} empty directories",
//!     summary.files_written, summary.symlinks_recorded, summary.empty_dirs_recorded
//! );
//! # Ok::<(), cachepack::Error>(())
//! ```
//!
//! Packing is a one-shot, all-or-nothing setup step: any missing source
//! directory or leftover staging/output path aborts the run, and the
//! expected recovery is to clean up and re-run.
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `cachepack` command-line binary

pub mod error;
pub mod pack;
pub mod staging;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::pack::{
        ARCHIVE_DIR, ARCHIVE_FILE, DIRECTORIES_ENTRY, EmptyDirManifest, PackPhase, PackProgress,
        PackProgressCallback, PackSummary, SYMLINKS_ENTRY, SymlinkManifest, create_archive,
        pack_dependencies,
    };
    pub use crate::staging::{RELOCATIONS, STAGING_DIR, stage_dependencies};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
