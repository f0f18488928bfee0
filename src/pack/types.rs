//! Types for packing progress tracking

/// Progress callback type for packing operations
pub type PackProgressCallback<'a> = &'a (dyn Fn(&PackProgress) + Sync + Send);

/// Progress information during a packing run
#[derive(Debug, Clone)]
pub struct PackProgress {
    /// Current operation phase
    pub phase: PackPhase,
    /// Current item number (1-indexed)
    pub current: usize,
    /// Total number of items
    pub total: usize,
    /// Current file being processed (if applicable)
    pub current_file: Option<String>,
}

impl PackProgress {
    /// Create a new progress update
    #[must_use]
    pub fn new(phase: PackPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: None,
        }
    }

    /// Create a progress update with a file/item name
    #[must_use]
    pub fn with_file(
        phase: PackPhase,
        current: usize,
        total: usize,
        file: impl Into<String>,
    ) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: Some(file.into()),
        }
    }

    /// Get the progress percentage (0.0 - 1.0)
    #[must_use]
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.current as f32 / self.total as f32
        }
    }
}

/// Phase of a packing run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackPhase {
    /// Moving dependency directories into the staging root
    Relocating,
    /// Enumerating the staging root
    Scanning,
    /// Writing file entries into the archive
    Compressing,
    /// Writing the symlink and empty-directory manifests
    WritingManifests,
    /// Run complete
    Complete,
}

impl PackPhase {
    /// Get a human-readable description of this phase
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Relocating => "Relocating dependencies",
            Self::Scanning => "Scanning staging root",
            Self::Compressing => "Compressing files",
            Self::WritingManifests => "Writing manifests",
            Self::Complete => "Complete",
        }
    }
}
