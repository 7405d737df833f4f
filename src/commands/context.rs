use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::Result;
use crate::output::print_warning;
use crate::stats::RunReport;
use crate::{EXIT_FILES_SKIPPED, EXIT_SUCCESS};

/// Load the effective configuration for a command.
///
/// # Errors
/// Returns an error if an explicit or discovered config file is invalid.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Send a rendered report to `output_path`, or to stdout unless `quiet`.
///
/// # Errors
/// Returns an error if the output file cannot be created or written.
pub fn write_report(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
        info!(path = %path.display(), "report written");
    } else if !quiet {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
    }
    Ok(())
}

/// Exit code for a finished run, warning about skipped files.
#[must_use]
pub fn exit_code_for(report: &RunReport, quiet: bool) -> i32 {
    if !report.has_skipped() {
        return EXIT_SUCCESS;
    }
    if !quiet {
        print_warning(&format!(
            "{} file(s) could not be read and were skipped",
            report.skipped().len()
        ));
    }
    EXIT_FILES_SKIPPED
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
