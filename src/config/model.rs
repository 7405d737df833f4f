use serde::{Deserialize, Serialize};

use crate::stats::DEFAULT_THRESHOLD;

/// What to do when a text file cannot be opened or read.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnreadablePolicy {
    /// Log the file, list it in the report, keep counting the rest.
    #[default]
    Skip,
    /// Stop the whole run with an error.
    Abort,
}

/// Counting options [count].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountConfig {
    /// Word-count boundary for the below / at-or-above buckets.
    #[serde(default = "default_threshold")]
    pub threshold: usize,

    /// Report each file with its word count.
    #[serde(default)]
    pub per_file: bool,

    /// File extensions treated as text documents.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Descend into subdirectories.
    #[serde(default)]
    pub recursive: bool,

    #[serde(default)]
    pub on_unreadable: UnreadablePolicy,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            per_file: false,
            extensions: default_extensions(),
            recursive: false,
            on_unreadable: UnreadablePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExcludeConfig {
    /// Glob patterns for files to leave out.
    #[serde(default)]
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub count: CountConfig,

    #[serde(default)]
    pub exclude: ExcludeConfig,
}

const fn default_threshold() -> usize {
    DEFAULT_THRESHOLD
}

fn default_extensions() -> Vec<String> {
    vec!["txt".to_string()]
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
