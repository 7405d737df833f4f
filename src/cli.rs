use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "word-tally")]
#[command(author, version, about = "Count words across a folder of text documents")]
#[command(long_about = "Counts the words in every text file of a folder, then reports totals, \
    the average per file, and how many files fall below or at/above a word-count threshold.\n\n\
    Run without a subcommand for an interactive session.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Completed, but some files could not be read and were skipped\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count words in a folder and print the report
    Count(CountArgs),

    /// Answer a few questions, then count (default when no subcommand is given)
    Interactive,

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct CountArgs {
    /// Folder containing the text documents
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Word-count threshold for the below / at-or-above buckets (overrides config)
    #[arg(short, long, value_parser = parse_threshold_arg)]
    pub threshold: Option<usize>,

    /// Print every file with its word count
    #[arg(short, long)]
    pub per_file: bool,

    /// File extensions to count (comma-separated, e.g., txt,md)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Abort the run on the first unreadable file instead of skipping it
    #[arg(long)]
    pub fail_fast: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".word-tally.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = ".word-tally.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

fn parse_threshold_arg(value: &str) -> Result<usize, String> {
    crate::config::parse_threshold(value).map_err(|e| e.to_string())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
