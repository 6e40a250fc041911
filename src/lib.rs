#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::Console, toml_config::TomlConfig, RunConfig};
pub use crate::core::{finder::find_pair, session::PairSumSession};
pub use domain::model::{IndexPair, OutputFormat, Report};
pub use utils::error::{PairSumError, Result};
