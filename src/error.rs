use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordTallyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid threshold '{value}': expected a natural number")]
    InvalidThreshold { value: String },

    #[error("Failed to read file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot list directory: {path}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl WordTallyError {
    /// Short category name used in log fields.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::InvalidThreshold { .. } => "InvalidThreshold",
            Self::FileAccess { .. } => "FileAccess",
            Self::DirectoryRead { .. } => "DirectoryRead",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// Error message including the underlying cause, if any.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::FileAccess { source, .. } | Self::DirectoryRead { source, .. } => {
                format!("{self}: {source}")
            }
            Self::InvalidPattern { source, .. } => format!("{self}: {source}"),
            _ => self.to_string(),
        }
    }

    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidThreshold { .. } => Some("use a whole number such as 1000"),
            Self::FileAccess { .. } => {
                Some("check the file's permissions and encoding, or run without --fail-fast")
            }
            Self::DirectoryRead { .. } => Some("check that the folder exists and is readable"),
            Self::InvalidPattern { .. } => Some("fix the glob in [exclude].patterns or --exclude"),
            Self::TomlParse(_) => Some("run `word-tally config validate` to check the file"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, WordTallyError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
