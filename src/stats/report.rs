use std::path::{Path, PathBuf};

use super::Summary;

/// A document left out of the statistics because it could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Everything a formatter needs to render one run.
#[derive(Debug, Clone)]
pub struct RunReport {
    root: PathBuf,
    summary: Summary,
    skipped: Vec<SkippedFile>,
}

impl RunReport {
    #[must_use]
    pub const fn new(root: PathBuf, summary: Summary, skipped: Vec<SkippedFile>) -> Self {
        Self {
            root,
            summary,
            skipped,
        }
    }

    /// Folder the documents were listed from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub const fn summary(&self) -> &Summary {
        &self.summary
    }

    #[must_use]
    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    #[must_use]
    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}
