pub mod config;
pub mod context;
pub mod count;
pub mod init;
pub mod interactive;
pub mod runner;

pub use config::run_config;
pub use count::{run_count, run_count_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use interactive::{SessionAnswers, run_interactive, run_interactive_session};
pub use runner::{RunOptions, count_file, run_tally};
