//! Error types for `cachepack`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `cachepack` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Relocation Errors ====================
    /// A fixed source directory is missing from the project root.
    #[error("source directory not found: {path}")]
    SourceMissing {
        /// The expected source directory path.
        path: PathBuf,
    },

    /// A fixed source path exists but is not a directory.
    #[error("source path is not a directory: {path}")]
    SourceNotADirectory {
        /// The offending source path.
        path: PathBuf,
    },

    /// The staging root already exists from a previous run.
    #[error("staging root already exists: {path}")]
    StagingRootExists {
        /// The pre-existing staging root path.
        path: PathBuf,
    },

    /// The archive output directory already exists from a previous run.
    #[error("archive output directory already exists: {path}")]
    OutputDirExists {
        /// The pre-existing output directory path.
        path: PathBuf,
    },

    // ==================== Archive Errors ====================
    /// A path could not be represented as an archive entry name.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),

    /// ZIP archive write error.
    #[error("ZIP error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    // ==================== Serialization Errors ====================
    /// JSON serialization error (manifests).
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

// Add conversion from walkdir::Error
impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

/// A specialized Result type for `cachepack` operations.
pub type Result<T> = std::result::Result<T, Error>;
