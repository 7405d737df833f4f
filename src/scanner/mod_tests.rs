use std::path::Path;

use super::*;
use tempfile::TempDir;

struct AcceptAllFilter;

impl FileFilter for AcceptAllFilter {
    fn should_include(&self, _path: &Path) -> bool {
        true
    }
}

struct TextOnlyFilter;

impl FileFilter for TextOnlyFilter {
    fn should_include(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "txt")
    }
}

#[test]
fn scanner_finds_files_in_directory() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("a.txt"), "one").unwrap();
    std::fs::write(temp_dir.path().join("b.txt"), "two").unwrap();

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(files.len(), 2);
}

#[test]
fn scanner_returns_files_sorted_by_name() {
    let temp_dir = TempDir::new().unwrap();
    for name in ["c.txt", "a.txt", "b.txt"] {
        std::fs::write(temp_dir.path().join(name), "").unwrap();
    }

    let files = DirectoryScanner::new(AcceptAllFilter)
        .scan(temp_dir.path())
        .unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();

    assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
}

#[test]
fn scanner_skips_subdirectories_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let sub_dir = temp_dir.path().join("nested");
    std::fs::create_dir(&sub_dir).unwrap();
    std::fs::write(sub_dir.join("deep.txt"), "deep").unwrap();
    std::fs::write(temp_dir.path().join("top.txt"), "top").unwrap();

    let files = DirectoryScanner::new(AcceptAllFilter)
        .scan(temp_dir.path())
        .unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("top.txt"));
}

#[test]
fn recursive_scanner_descends() {
    let temp_dir = TempDir::new().unwrap();
    let sub_dir = temp_dir.path().join("nested");
    std::fs::create_dir(&sub_dir).unwrap();
    std::fs::write(sub_dir.join("deep.txt"), "deep").unwrap();
    std::fs::write(temp_dir.path().join("top.txt"), "top").unwrap();

    let files = DirectoryScanner::new(AcceptAllFilter)
        .recursive(true)
        .scan(temp_dir.path())
        .unwrap();

    assert_eq!(files.len(), 2);
}

#[test]
fn scanner_respects_filter() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("doc.txt"), "").unwrap();
    std::fs::write(temp_dir.path().join("image.png"), "").unwrap();

    let files = DirectoryScanner::new(TextOnlyFilter)
        .scan(temp_dir.path())
        .unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("doc.txt"));
}

#[test]
fn exclude_patterns_match_relative_paths() {
    let temp_dir = TempDir::new().unwrap();
    let drafts = temp_dir.path().join("drafts");
    std::fs::create_dir(&drafts).unwrap();
    std::fs::write(drafts.join("wip.txt"), "").unwrap();
    std::fs::write(temp_dir.path().join("done.txt"), "").unwrap();

    let filter = GlobFilter::new(&["txt".to_string()], &["drafts/**".to_string()]).unwrap();
    let files = DirectoryScanner::new(filter)
        .recursive(true)
        .scan(temp_dir.path())
        .unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("done.txt"));
}

#[test]
fn empty_directory_yields_no_files() {
    let temp_dir = TempDir::new().unwrap();
    let files = DirectoryScanner::new(AcceptAllFilter)
        .scan(temp_dir.path())
        .unwrap();
    assert!(files.is_empty());
}

#[test]
fn missing_root_is_directory_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist");

    let err = DirectoryScanner::new(AcceptAllFilter)
        .scan(&missing)
        .unwrap_err();

    assert!(matches!(err, WordTallyError::DirectoryRead { .. }));
}

#[test]
fn file_root_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("single.txt");
    std::fs::write(&file, "words").unwrap();

    let err = DirectoryScanner::new(AcceptAllFilter).scan(&file).unwrap_err();

    assert!(err.to_string().contains("Not a directory"));
}
