// Application layer: wires config, console and session together and maps
// outcomes to exit statuses. `main` only adds process-level concerns.

use crate::config::cli::Console;
use crate::config::{CliConfig, RunConfig};
use crate::core::session::PairSumSession;
use crate::domain::model::{OutputFormat, Report};
use crate::utils::error::{PairSumError, Result};
use crate::utils::validation::Validate;
use std::io::{BufRead, Write};

/// Found, not found, or rejected input.
pub const EXIT_OK: i32 = 0;
/// Configuration or console failure.
pub const EXIT_FAILURE: i32 = 1;

pub fn load_config(cli: &CliConfig) -> Result<RunConfig> {
    cli.validate()?;
    cli.resolve()
}

/// Prints the user-facing message and suggestion for `err` and returns the exit status.
pub fn report_failure<E: Write>(stderr: &mut E, err: &PairSumError) -> i32 {
    tracing::error!("❌ pair-sum failed: {}", err);
    // stderr may itself be gone; nothing left to report to
    let _ = writeln!(stderr, "❌ {}", err.user_friendly_message());
    let _ = writeln!(stderr, "💡 {}", err.recovery_suggestion());
    EXIT_FAILURE
}

/// Runs one session. In JSON mode the prompts go to `stderr` so `stdout`
/// carries nothing but the report.
pub fn execute<R, W, E>(config: RunConfig, reader: R, stdout: W, stderr: &mut E) -> i32
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let prompts = (config.format == OutputFormat::Json).then_some(&mut *stderr);
    let console = Console::new(reader, stdout).prompts_to(prompts);

    let outcome = PairSumSession::new(config, console).run();

    match outcome {
        Ok(Report::InvalidInput { kind, .. }) => {
            tracing::info!("Stopped early on invalid {:?} input", kind);
            EXIT_OK
        }
        Ok(_) => EXIT_OK,
        Err(e) => report_failure(stderr, &e),
    }
}

/// Everything `main` does after argument parsing. `init_logging` receives the
/// resolved output format, so a format set only in the config file still picks
/// the JSON logger.
pub fn run<R, W, E, L>(
    cli: &CliConfig,
    reader: R,
    stdout: W,
    stderr: &mut E,
    init_logging: L,
) -> i32
where
    R: BufRead,
    W: Write,
    E: Write,
    L: FnOnce(OutputFormat),
{
    match load_config(cli) {
        Ok(config) => {
            init_logging(config.format);
            tracing::debug!("Resolved config: {:?}", config);
            execute(config, reader, stdout, stderr)
        }
        Err(e) => {
            init_logging(cli.format.unwrap_or_default());
            report_failure(stderr, &e)
        }
    }
}
