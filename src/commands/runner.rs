use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::{Config, UnreadablePolicy};
use crate::counter::WordCounter;
use crate::error::{Result, WordTallyError};
use crate::output::ScanProgress;
use crate::scanner::{DirectoryScanner, FileScanner, GlobFilter};
use crate::stats::{Aggregator, RunReport, SkippedFile};

/// Everything one counting run needs, resolved from config and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub root: PathBuf,
    pub threshold: usize,
    pub per_file: bool,
    pub extensions: Vec<String>,
    pub exclude: Vec<String>,
    pub recursive: bool,
    pub on_unreadable: UnreadablePolicy,
}

impl RunOptions {
    #[must_use]
    pub fn from_config(root: PathBuf, config: &Config) -> Self {
        Self {
            root,
            threshold: config.count.threshold,
            per_file: config.count.per_file,
            extensions: config.count.extensions.clone(),
            exclude: config.exclude.patterns.clone(),
            recursive: config.count.recursive,
            on_unreadable: config.count.on_unreadable,
        }
    }
}

/// Count the words of one file, streaming it line by line.
///
/// # Errors
/// Returns [`WordTallyError::FileAccess`] if the file cannot be opened or read,
/// including content that is not valid UTF-8.
pub fn count_file(path: &Path, counter: &WordCounter) -> Result<usize> {
    let file_access = |source| WordTallyError::FileAccess {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(file_access)?;
    counter.count_reader(BufReader::new(file)).map_err(file_access)
}

/// List the documents under `options.root`, count each, and fold the counts
/// into a report.
///
/// # Errors
/// Returns an error if the folder cannot be listed, an exclude pattern is
/// invalid, or a file is unreadable under [`UnreadablePolicy::Abort`].
pub fn run_tally(options: &RunOptions, progress: &ScanProgress) -> Result<RunReport> {
    let filter = GlobFilter::new(&options.extensions, &options.exclude)?;
    let scanner = DirectoryScanner::new(filter).recursive(options.recursive);
    let files = scanner.scan(&options.root)?;
    info!(root = %options.root.display(), files = files.len(), "scanned folder");

    progress.set_length(files.len() as u64);

    let counter = WordCounter::new();
    let mut aggregator = Aggregator::new(options.threshold).with_per_file(options.per_file);
    let mut skipped = Vec::new();

    for path in &files {
        match count_file(path, &counter) {
            Ok(words) => {
                debug!(path = %path.display(), words, "counted");
                aggregator.record(path, words);
            }
            Err(err) => match options.on_unreadable {
                UnreadablePolicy::Abort => {
                    progress.finish();
                    return Err(err);
                }
                UnreadablePolicy::Skip => {
                    let reason = match &err {
                        WordTallyError::FileAccess { source, .. } => source.to_string(),
                        other => other.to_string(),
                    };
                    warn!(path = %path.display(), %reason, "skipping unreadable file");
                    skipped.push(SkippedFile {
                        path: path.clone(),
                        reason,
                    });
                }
            },
        }
        progress.inc();
    }

    progress.finish();
    let summary = aggregator.finalize();
    info!(
        files = summary.total_files(),
        words = summary.total_words(),
        skipped = skipped.len(),
        "run complete"
    );

    Ok(RunReport::new(options.root.clone(), summary, skipped))
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
