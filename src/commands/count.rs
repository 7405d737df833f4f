use crate::cli::{Cli, CountArgs};
use crate::config::{Config, UnreadablePolicy};
use crate::output::{ScanProgress, print_error};
use crate::{EXIT_CONFIG_ERROR, Result};

use super::context::{exit_code_for, load_config, write_report};
use super::runner::{RunOptions, run_tally};

#[must_use]
pub fn run_count(args: &CountArgs, cli: &Cli) -> i32 {
    match run_count_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs a non-interactive count.
///
/// # Errors
/// Returns an error if configuration is invalid, the folder cannot be listed,
/// an unreadable file aborts the run, or the report cannot be written.
pub fn run_count_impl(args: &CountArgs, cli: &Cli) -> Result<i32> {
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);

    let options = RunOptions::from_config(args.path.clone(), &config);
    let progress = ScanProgress::new(0, cli.quiet);
    let report = run_tally(&options, &progress)?;

    let output = args.format.render(&report)?;
    write_report(args.output.as_deref(), &output, cli.quiet)?;

    Ok(exit_code_for(&report, cli.quiet))
}

pub(crate) fn apply_cli_overrides(config: &mut Config, args: &CountArgs) {
    if let Some(threshold) = args.threshold {
        config.count.threshold = threshold;
    }
    if args.per_file {
        config.count.per_file = true;
    }
    if let Some(ext) = &args.ext {
        config.count.extensions.clone_from(ext);
    }
    config.exclude.patterns.extend(args.exclude.iter().cloned());
    if args.recursive {
        config.count.recursive = true;
    }
    if args.fail_fast {
        config.count.on_unreadable = UnreadablePolicy::Abort;
    }
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
