use super::*;

fn render_error(use_colors: bool, suggestion: Option<&str>) -> String {
    let out = ErrorOutput::with_colors(use_colors);
    let mut buf = Vec::new();
    out.write_error(&mut buf, "InvalidThreshold", "bad value", suggestion);
    String::from_utf8(buf).unwrap()
}

#[test]
fn error_without_colors_basic() {
    assert_eq!(render_error(false, None), "✖ InvalidThreshold: bad value\n");
}

#[test]
fn error_without_colors_with_suggestion() {
    let result = render_error(false, Some("enter a whole number"));
    assert_eq!(
        result,
        "✖ InvalidThreshold: bad value\n  help: enter a whole number\n"
    );
}

#[test]
fn error_with_colors_contains_escape_codes() {
    let result = render_error(true, Some("hint"));
    assert!(result.contains("\x1b[31m"));
    assert!(result.contains("\x1b[36m"));
    assert!(result.contains("bad value"));
}

#[test]
fn warning_without_colors() {
    let out = ErrorOutput::with_colors(false);
    let mut buf = Vec::new();
    out.write_warning(&mut buf, "2 files skipped");
    assert_eq!(String::from_utf8(buf).unwrap(), "⚠ Warning: 2 files skipped\n");
}

#[test]
fn warning_with_colors() {
    let out = ErrorOutput::with_colors(true);
    let mut buf = Vec::new();
    out.write_warning(&mut buf, "careful");
    let result = String::from_utf8(buf).unwrap();
    assert!(result.contains("\x1b[33m"));
    assert!(result.contains("careful"));
}
