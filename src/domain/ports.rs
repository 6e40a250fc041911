use crate::domain::model::{OutputFormat, Report};
use crate::utils::error::Result;

/// Where the session gets its two input lines from.
pub trait LineSource {
    /// Shows `prompt` and reads one line. `None` means end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Where the final report goes.
pub trait ReportSink {
    fn emit(&mut self, report: &Report, format: OutputFormat) -> Result<()>;
}

pub trait SessionSettings {
    fn list_prompt(&self) -> &str;
    fn target_prompt(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
    /// Pre-supplied list line; skips the list prompt.
    fn numbers(&self) -> Option<&str>;
    /// Pre-supplied target line; skips the target prompt.
    fn target(&self) -> Option<&str>;
}
