use serde::Serialize;

use crate::error::Result;
use crate::stats::RunReport;

use super::ReportFormatter;
use super::path::display_path;

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReportFormatter;

#[derive(Serialize)]
struct JsonReport {
    summary: JsonSummary,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    files: Vec<JsonFileWords>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped: Vec<JsonSkippedFile>,
}

#[derive(Serialize)]
struct JsonSummary {
    total_files: usize,
    total_words: usize,
    average_words: f64,
    threshold: usize,
    below_threshold: JsonBucket,
    at_or_above_threshold: JsonBucket,
}

#[derive(Serialize)]
struct JsonBucket {
    files: usize,
    words: usize,
}

#[derive(Serialize)]
struct JsonFileWords {
    path: String,
    words: usize,
}

#[derive(Serialize)]
struct JsonSkippedFile {
    path: String,
    error: String,
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let summary = report.summary();
        let root = Some(report.root());

        let files = summary
            .per_file()
            .map(|per_file| {
                per_file
                    .iter()
                    .map(|(path, words)| JsonFileWords {
                        path: display_path(path, root),
                        words: *words,
                    })
                    .collect()
            })
            .unwrap_or_default();

        let skipped = report
            .skipped()
            .iter()
            .map(|s| JsonSkippedFile {
                path: display_path(&s.path, root),
                error: s.reason.clone(),
            })
            .collect();

        let output = JsonReport {
            summary: JsonSummary {
                total_files: summary.total_files(),
                total_words: summary.total_words(),
                average_words: summary.average_words(),
                threshold: summary.threshold(),
                below_threshold: JsonBucket {
                    files: summary.below().files,
                    words: summary.below().words,
                },
                at_or_above_threshold: JsonBucket {
                    files: summary.at_or_above().files,
                    words: summary.at_or_above().words,
                },
            },
            files,
            skipped,
        };

        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
