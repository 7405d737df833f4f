use std::path::PathBuf;

use super::*;
use crate::stats::Aggregator;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("TXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("Json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
}

#[test]
fn output_format_unknown() {
    let err = "sarif".parse::<OutputFormat>().unwrap_err();
    assert!(err.contains("sarif"));
}

#[test]
fn output_format_default_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn render_dispatches_by_format() {
    let report = RunReport::new(PathBuf::from("/docs"), Aggregator::default().finalize(), vec![]);
    let text = OutputFormat::Text.render(&report).unwrap();
    let json = OutputFormat::Json.render(&report).unwrap();
    assert!(text.contains("STATS"));
    assert!(json.trim_start().starts_with('{'));
}
