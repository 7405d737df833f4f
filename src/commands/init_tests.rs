use clap::Parser;
use tempfile::TempDir;

use super::{generate_config_template, run_init, run_init_impl};
use crate::cli::{Cli, InitArgs};
use crate::config::{Config, UnreadablePolicy, validate_config};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

fn quiet_cli() -> Cli {
    Cli::parse_from(["word-tally", "--quiet"])
}

#[test]
fn generate_config_template_contains_count_section() {
    let template = generate_config_template();
    assert!(template.contains("[count]"));
    assert!(template.contains("threshold = 1000"));
    assert!(template.contains(r#"extensions = ["txt"]"#));
    assert!(template.contains(r#"on_unreadable = "skip""#));
}

#[test]
fn generate_config_template_matches_defaults() {
    let template = generate_config_template();
    let config: Config = toml::from_str(&template).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.count.on_unreadable, UnreadablePolicy::Skip);
    assert!(validate_config(&config).is_ok());
}

#[test]
fn run_init_creates_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".word-tally.toml");

    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    run_init_impl(&args).unwrap();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[count]"));
}

#[test]
fn run_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".word-tally.toml");
    std::fs::write(&config_path, "# mine").unwrap();

    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    let err = run_init_impl(&args).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), "# mine");
    assert_eq!(run_init(&args, &quiet_cli()), EXIT_CONFIG_ERROR);
}

#[test]
fn run_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".word-tally.toml");
    std::fs::write(&config_path, "# mine").unwrap();

    let args = InitArgs {
        output: config_path.clone(),
        force: true,
    };

    assert_eq!(run_init(&args, &quiet_cli()), EXIT_SUCCESS);
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[count]"));
}
