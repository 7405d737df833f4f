use std::path::{Path, PathBuf};

use indexmap::IndexMap;

/// Word-count boundary used when none is configured.
pub const DEFAULT_THRESHOLD: usize = 1000;

/// Files and words that fell on one side of the threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bucket {
    pub files: usize,
    pub words: usize,
}

impl Bucket {
    const fn add(&mut self, words: usize) {
        self.files += 1;
        self.words += words;
    }
}

/// Folds per-file word counts into run statistics.
///
/// Calling [`Aggregator::finalize`] consumes the aggregator, so no count can be
/// recorded once the [`Summary`] exists.
#[derive(Debug, Clone)]
pub struct Aggregator {
    threshold: usize,
    total_files: usize,
    total_words: usize,
    below: Bucket,
    at_or_above: Bucket,
    per_file: Option<IndexMap<PathBuf, usize>>,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl Aggregator {
    #[must_use]
    pub const fn new(threshold: usize) -> Self {
        Self {
            threshold,
            total_files: 0,
            total_words: 0,
            below: Bucket { files: 0, words: 0 },
            at_or_above: Bucket { files: 0, words: 0 },
            per_file: None,
        }
    }

    /// Keep each file's count, in recording order, for the report.
    #[must_use]
    pub fn with_per_file(mut self, per_file: bool) -> Self {
        self.per_file = per_file.then(IndexMap::new);
        self
    }

    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    #[must_use]
    pub const fn total_files(&self) -> usize {
        self.total_files
    }

    #[must_use]
    pub const fn total_words(&self) -> usize {
        self.total_words
    }

    #[must_use]
    pub const fn below(&self) -> Bucket {
        self.below
    }

    #[must_use]
    pub const fn at_or_above(&self) -> Bucket {
        self.at_or_above
    }

    pub fn record(&mut self, file: &Path, words: usize) {
        self.total_files += 1;
        self.total_words += words;

        if words < self.threshold {
            self.below.add(words);
        } else {
            self.at_or_above.add(words);
        }

        if let Some(per_file) = self.per_file.as_mut() {
            per_file.insert(file.to_path_buf(), words);
        }
    }

    #[must_use]
    pub fn finalize(self) -> Summary {
        #[allow(clippy::cast_precision_loss)]
        let average_words = if self.total_files > 0 {
            self.total_words as f64 / self.total_files as f64
        } else {
            0.0
        };

        Summary {
            threshold: self.threshold,
            total_files: self.total_files,
            total_words: self.total_words,
            average_words,
            below: self.below,
            at_or_above: self.at_or_above,
            per_file: self.per_file,
        }
    }
}

/// Finalized statistics for one run. Read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    threshold: usize,
    total_files: usize,
    total_words: usize,
    average_words: f64,
    below: Bucket,
    at_or_above: Bucket,
    per_file: Option<IndexMap<PathBuf, usize>>,
}

impl Summary {
    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    #[must_use]
    pub const fn total_files(&self) -> usize {
        self.total_files
    }

    #[must_use]
    pub const fn total_words(&self) -> usize {
        self.total_words
    }

    #[must_use]
    pub const fn average_words(&self) -> f64 {
        self.average_words
    }

    #[must_use]
    pub const fn below(&self) -> Bucket {
        self.below
    }

    #[must_use]
    pub const fn at_or_above(&self) -> Bucket {
        self.at_or_above
    }

    /// Per-file counts in recording order, if they were requested.
    #[must_use]
    pub const fn per_file(&self) -> Option<&IndexMap<PathBuf, usize>> {
        self.per_file.as_ref()
    }
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;
