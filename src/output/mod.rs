mod error_output;
mod json;
pub mod path;
mod progress;
mod text;

pub use error_output::{ErrorOutput, print_error, print_warning};
pub use json::JsonReportFormatter;
pub use progress::ScanProgress;
pub use text::TextReportFormatter;

use crate::error::Result;
use crate::stats::RunReport;

/// Trait for rendering a finished run into an output format.
pub trait ReportFormatter {
    /// Format the run report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &RunReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Render `report` with the formatter for this format.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    pub fn render(self, report: &RunReport) -> Result<String> {
        match self {
            Self::Text => TextReportFormatter.format(report),
            Self::Json => JsonReportFormatter.format(report),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
