use std::ffi::OsStr;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, WordTallyError};

/// Decides whether a listed file is a document to count.
pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Keeps documents by extension, then drops anything an exclude glob matches.
///
/// Extensions compare without case and with an optional leading dot, so
/// `".TXT"` in the config accepts `notes.txt`.
#[derive(Debug)]
pub struct GlobFilter {
    extensions: Vec<String>,
    excludes: GlobSet,
}

impl GlobFilter {
    /// # Errors
    /// Returns [`WordTallyError::InvalidPattern`] if an exclude glob does not compile.
    pub fn new(extensions: &[String], exclude_patterns: &[String]) -> Result<Self> {
        let extensions = extensions
            .iter()
            .map(|ext| normalize_extension(ext))
            .filter(|ext| !ext.is_empty())
            .collect();

        Ok(Self {
            extensions,
            excludes: compile_excludes(exclude_patterns)?,
        })
    }

    fn is_text_document(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(OsStr::to_str) else {
            return false;
        };
        let ext = ext.to_ascii_lowercase();
        self.extensions.iter().any(|known| *known == ext)
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.is_text_document(path) && !self.excludes.is_match(path)
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}

fn compile_excludes(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| WordTallyError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|source| WordTallyError::InvalidPattern {
            pattern: patterns.join(", "),
            source,
        })
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
