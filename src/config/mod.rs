pub mod cli;
pub mod toml_config;

use crate::core::SessionSettings;
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::utils::validation::validate_path;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

pub const DEFAULT_LIST_PROMPT: &str = "Enter a list of integers separated by spaces: ";
pub const DEFAULT_TARGET_PROMPT: &str = "Enter the target number: ";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "pair-sum")]
#[command(about = "Find two numbers in a list that add up to a target")]
pub struct CliConfig {
    /// Whitespace-separated integers; skips the list prompt
    #[arg(long, allow_hyphen_values = true)]
    pub numbers: Option<String>,

    /// Target value; skips the target prompt
    #[arg(long, allow_hyphen_values = true)]
    pub target: Option<String>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the config file, if any, and lays the command-line values over it.
    pub fn resolve(&self) -> Result<RunConfig> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        let mut run = RunConfig::from(file);
        if let Some(format) = self.format {
            run.format = format;
        }
        run.numbers = self.numbers.clone();
        run.target = self.target.clone();
        run.validate()?;
        Ok(run)
    }
}

/// Fully resolved settings for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub list_prompt: String,
    pub target_prompt: String,
    pub format: OutputFormat,
    pub numbers: Option<String>,
    pub target: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            list_prompt: DEFAULT_LIST_PROMPT.to_string(),
            target_prompt: DEFAULT_TARGET_PROMPT.to_string(),
            format: OutputFormat::default(),
            numbers: None,
            target: None,
        }
    }
}

impl From<TomlConfig> for RunConfig {
    fn from(file: TomlConfig) -> Self {
        let defaults = RunConfig::default();
        Self {
            list_prompt: file.prompts.list.unwrap_or(defaults.list_prompt),
            target_prompt: file.prompts.target.unwrap_or(defaults.target_prompt),
            format: file.output.format.unwrap_or(defaults.format),
            numbers: None,
            target: None,
        }
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("prompts.list", &self.list_prompt)?;
        validate_non_empty_string("prompts.target", &self.target_prompt)?;
        Ok(())
    }
}

impl SessionSettings for RunConfig {
    fn list_prompt(&self) -> &str {
        &self.list_prompt
    }

    fn target_prompt(&self) -> &str {
        &self.target_prompt
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn numbers(&self) -> Option<&str> {
        self.numbers.as_deref()
    }

    fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_negative_values() {
        let cli = CliConfig::parse_from(["pair-sum", "--numbers", "-3 4 3", "--target", "-1"]);
        assert_eq!(cli.numbers.as_deref(), Some("-3 4 3"));
        assert_eq!(cli.target.as_deref(), Some("-1"));
    }

    #[test]
    fn test_resolve_without_file_uses_defaults() {
        let cli = CliConfig::parse_from(["pair-sum", "--format", "json"]);
        let run = cli.resolve().unwrap();
        assert_eq!(run.list_prompt, DEFAULT_LIST_PROMPT);
        assert_eq!(run.format, OutputFormat::Json);
        assert_eq!(run.numbers, None);
    }
}
