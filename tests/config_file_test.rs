#![cfg(feature = "cli")]

use clap::Parser;
use pair_sum::{CliConfig, OutputFormat, PairSumError, TomlConfig};
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("pair-sum.toml");
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_file_prompts_and_format_are_applied() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"
[prompts]
list = "Numbers: "
target = "Target: "

[output]
format = "json"
"#,
    );

    let cli = CliConfig::parse_from(["pair-sum", "--config", path.as_str()]);
    let run = cli.resolve().unwrap();

    assert_eq!(run.list_prompt, "Numbers: ");
    assert_eq!(run.target_prompt, "Target: ");
    assert_eq!(run.format, OutputFormat::Json);
}

#[test]
fn test_command_line_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[output]\nformat = \"json\"\n");

    let cli = CliConfig::parse_from([
        "pair-sum",
        "-c",
        path.as_str(),
        "--format",
        "text",
        "--numbers",
        "1 2",
        "--target",
        "3",
    ]);
    let run = cli.resolve().unwrap();

    assert_eq!(run.format, OutputFormat::Text);
    assert_eq!(run.numbers.as_deref(), Some("1 2"));
    assert_eq!(run.target.as_deref(), Some("3"));
}

#[test]
fn test_missing_file_is_a_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.toml");

    let err = TomlConfig::from_file(&missing).unwrap_err();
    assert!(matches!(err, PairSumError::ConfigError { .. }));
    assert!(!err.is_input_error());
}

#[test]
fn test_unknown_key_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[prompts]\ncolour = \"red\"\n");

    let err = TomlConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, PairSumError::TomlError(_)));
}
