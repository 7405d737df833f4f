use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{Config, UnreadablePolicy, validate_config};
use crate::output::{OutputFormat, print_error};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, WordTallyError};

use super::context::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config, cli),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: &Path, cli: &Cli) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            if !cli.quiet {
                println!("Configuration is valid: {}", config_path.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub(crate) fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(WordTallyError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;
    validate_config(&config)
}

fn run_config_show(config_path: Option<&Path>, format: OutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: OutputFormat,
    cli: &Cli,
) -> Result<String> {
    let config = load_config(config_path, cli.no_config)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Text => Ok(format_config_text(&config)),
    }
}

#[must_use]
pub(crate) fn format_config_text(config: &Config) -> String {
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    output.push_str("[count]\n");
    let _ = writeln!(output, "  threshold = {}", config.count.threshold);
    let _ = writeln!(output, "  per_file = {}", config.count.per_file);
    let _ = writeln!(output, "  extensions = {:?}", config.count.extensions);
    let _ = writeln!(output, "  recursive = {}", config.count.recursive);
    let on_unreadable = match config.count.on_unreadable {
        UnreadablePolicy::Skip => "skip",
        UnreadablePolicy::Abort => "abort",
    };
    let _ = writeln!(output, "  on_unreadable = \"{on_unreadable}\"");

    output.push_str("\n[exclude]\n");
    if config.exclude.patterns.is_empty() {
        output.push_str("  patterns = []\n");
    } else {
        let _ = writeln!(output, "  patterns = {:?}", config.exclude.patterns);
    }

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
