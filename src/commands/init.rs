use std::fs;

use tracing::info;

use crate::cli::{Cli, InitArgs};
use crate::output::print_error;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, WordTallyError};

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            if !cli.quiet {
                println!("Created configuration file: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the default configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(WordTallyError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    info!(path = %output_path.display(), "configuration template written");
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# word-tally configuration file

[count]
# Files with fewer words than this fall in the "below" bucket (default: 1000)
threshold = 1000

# Print every file with its word count before the summary (default: false)
per_file = false

# File extensions treated as text documents
extensions = ["txt"]

# Descend into subdirectories (default: false)
recursive = false

# What to do with a file that cannot be read: "skip" or "abort" (default: "skip")
on_unreadable = "skip"

# Exclude patterns (glob syntax, matched against paths relative to the folder)
[exclude]
patterns = [
    # "drafts/**",
    # "*.bak.txt",
]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
