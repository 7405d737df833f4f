mod filter;

pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Result, WordTallyError};

/// Trait for listing the documents of a folder.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths, sorted by name.
    ///
    /// # Errors
    /// Returns an error if `root` does not exist or is not a directory.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    recursive: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            recursive: false,
        }
    }

    #[must_use]
    pub const fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    fn ensure_directory(root: &Path) -> Result<()> {
        let metadata = std::fs::metadata(root).map_err(|source| WordTallyError::DirectoryRead {
            path: root.to_path_buf(),
            source,
        })?;
        if metadata.is_dir() {
            Ok(())
        } else {
            Err(WordTallyError::Config(format!(
                "Not a directory: {}",
                root.display()
            )))
        }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            if self.filter.should_include(relative) {
                files.push(entry.into_path());
            } else {
                debug!(path = %relative.display(), "filtered out");
            }
        }

        files
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Self::ensure_directory(root)?;
        Ok(self.scan_impl(root))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
