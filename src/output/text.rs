use std::io::Write;

use crate::error::Result;
use crate::stats::RunReport;

use super::ReportFormatter;
use super::path::display_path;

const BANNER_STARS: usize = 36;

/// Plain-text report, laid out for reading in a terminal or a `.txt` file.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReportFormatter;

impl TextReportFormatter {
    fn banner() -> String {
        let stars = "*".repeat(BANNER_STARS);
        format!("{stars}STATS{stars}")
    }
}

impl ReportFormatter for TextReportFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let mut output = Vec::new();
        let summary = report.summary();
        let root = Some(report.root());

        if let Some(per_file) = summary.per_file() {
            for (path, words) in per_file {
                writeln!(output, "{}: {words}", display_path(path, root))?;
            }
        }

        writeln!(output)?;
        writeln!(output, "{}", Self::banner())?;
        writeln!(output)?;

        writeln!(
            output,
            "Total number of words in folder: {}",
            summary.total_words()
        )?;
        writeln!(output, "Total number of files: {}", summary.total_files())?;
        writeln!(
            output,
            "Average number of words per file: {:.2}",
            summary.average_words()
        )?;
        writeln!(output)?;

        let threshold = summary.threshold();
        let above = summary.at_or_above();
        let below = summary.below();
        writeln!(
            output,
            "Number of files {threshold} words in length or above: {}",
            above.files
        )?;
        writeln!(
            output,
            "Number of files below {threshold} words in length: {}",
            below.files
        )?;
        writeln!(output)?;
        writeln!(
            output,
            "Total words from files {threshold} words in length or above: {}",
            above.words
        )?;
        writeln!(
            output,
            "Total words from files below {threshold} words in length: {}",
            below.words
        )?;

        if report.has_skipped() {
            writeln!(output)?;
            writeln!(output, "Skipped files ({}):", report.skipped().len())?;
            for skipped in report.skipped() {
                writeln!(
                    output,
                    "  {}: {}",
                    display_path(&skipped.path, root),
                    skipped.reason
                )?;
            }
        }

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
