#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the word-tally binary.
#[macro_export]
macro_rules! word_tally {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("word-tally"))
    };
}

/// A minimal config exercising every section.
pub const BASIC_CONFIG: &str = r#"
[count]
threshold = 5
extensions = ["txt"]

[exclude]
patterns = ["drafts/**"]
"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a file with raw bytes, for content that is not valid UTF-8.
    pub fn create_binary_file(&self, relative_path: &str, content: &[u8]) {
        fs::write(self.dir.path().join(relative_path), content).expect("Failed to write file");
    }

    /// Creates a text file holding `words` words.
    pub fn create_text_file(&self, relative_path: &str, words: usize) {
        self.create_file(relative_path, &vec!["word"; words].join(" "));
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates the local `.word-tally.toml` config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".word-tally.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
