use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::cli::Cli;
use crate::config::{Config, parse_threshold};
use crate::output::{OutputFormat, ScanProgress, print_error};
use crate::prompt::Prompter;
use crate::{EXIT_CONFIG_ERROR, Result};

use super::context::{exit_code_for, load_config, write_report};
use super::runner::{RunOptions, run_tally};

const FOLDER_QUESTION: &str = "Please enter the name and/or path to a folder containing .txt files: ";
const WRITE_TO_FILE_QUESTION: &str = "Would you like to write to a file instead of printing the \
    results to the console? (Please type 'y' or 'n' to respond): ";
const OUTPUT_FILE_QUESTION: &str = "Please enter the name of a file you'd like to write to: ";
const THRESHOLD_QUESTION: &str = "Please enter the word count (natural numbers only): ";
const THRESHOLD_RETRY: &str = "Error: please enter a whole number of 0 or more: ";
const PER_FILE_QUESTION: &str = "\nFinally, would you like every file name to be printed with \
    its respective word count \n(as opposed to just the summary printing)? \n\
    (Please type 'y' or 'n' to respond): ";

/// Answers collected from one interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionAnswers {
    pub folder: PathBuf,
    pub output: Option<PathBuf>,
    pub threshold: Option<usize>,
    pub per_file: bool,
}

#[must_use]
pub fn run_interactive(cli: &Cli) -> i32 {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match run_interactive_impl(stdin.lock(), stdout.lock(), cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs the question-and-answer session, then counts.
///
/// # Errors
/// Returns an error if input ends early, configuration is invalid, the folder
/// cannot be listed, or the report cannot be written.
pub fn run_interactive_impl<R: BufRead, W: Write>(input: R, output: W, cli: &Cli) -> Result<i32> {
    let config = load_config(None, cli.no_config)?;
    run_interactive_session(input, output, &config)
}

/// Drive a session with an already loaded configuration.
///
/// # Errors
/// See [`run_interactive_impl`].
pub fn run_interactive_session<R: BufRead, W: Write>(
    input: R,
    output: W,
    config: &Config,
) -> Result<i32> {
    let mut prompter = Prompter::new(input, output);
    let answers = ask_questions(&mut prompter, config.count.threshold)?;
    debug!(?answers, "interactive answers");

    let mut options = RunOptions::from_config(answers.folder.clone(), config);
    if let Some(threshold) = answers.threshold {
        options.threshold = threshold;
    }
    options.per_file = answers.per_file;

    let report = run_tally(&options, &ScanProgress::hidden())?;
    let rendered = OutputFormat::Text.render(&report)?;

    let mut output = prompter.into_output();
    match &answers.output {
        Some(path) => write_report(Some(path.as_path()), &rendered, true)?,
        None => output.write_all(rendered.as_bytes())?,
    }
    output.write_all(b"Done!\n")?;
    output.flush()?;

    Ok(exit_code_for(&report, false))
}

/// Ask the session questions in order.
///
/// # Errors
/// Returns an I/O error if input ends before every question is answered.
pub fn ask_questions<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    default_threshold: usize,
) -> Result<SessionAnswers> {
    let folder = PathBuf::from(prompter.ask(FOLDER_QUESTION)?.trim());

    let output = if prompter.ask_yes_no(WRITE_TO_FILE_QUESTION)? {
        Some(PathBuf::from(prompter.ask(OUTPUT_FILE_QUESTION)?.trim()))
    } else {
        None
    };

    let threshold_question = format!(
        "\nThis program will automatically keep track of the number of files that fall \
         above or below {default_threshold} words. \nHowever, you have the option to keep \
         track of a different word count instead. \nWould you like to keep track of a \
         different word count? (Please type 'y' or 'n' to respond): "
    );
    let threshold = if prompter.ask_yes_no(&threshold_question)? {
        Some(ask_threshold(prompter)?)
    } else {
        None
    };

    let per_file = prompter.ask_yes_no(PER_FILE_QUESTION)?;

    Ok(SessionAnswers {
        folder,
        output,
        threshold,
        per_file,
    })
}

fn ask_threshold<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<usize> {
    let mut answer = prompter.ask(THRESHOLD_QUESTION)?;
    loop {
        match parse_threshold(&answer) {
            Ok(threshold) => return Ok(threshold),
            Err(e) => {
                debug!(error = %e, "rejected threshold");
                answer = prompter.ask(THRESHOLD_RETRY)?;
            }
        }
    }
}

#[cfg(test)]
#[path = "interactive_tests.rs"]
mod tests;
