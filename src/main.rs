use clap::Parser;

use word_tally::cli::{Cli, Commands};
use word_tally::commands::{run_config, run_count, run_init, run_interactive};
use word_tally::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        None | Some(Commands::Interactive) => run_interactive(&cli),
        Some(Commands::Count(args)) => run_count(args, &cli),
        Some(Commands::Init(args)) => run_init(args, &cli),
        Some(Commands::Config(args)) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
