use crate::core::finder::find_pair;
use crate::core::parser::{parse_sequence, parse_target};
use crate::domain::model::{InputKind, Report};
use crate::domain::ports::{LineSource, ReportSink, SessionSettings};
use crate::utils::error::{PairSumError, Result};

/// One run of the program: read the list, read the target, search, report.
pub struct PairSumSession<S, T>
where
    S: SessionSettings,
    T: LineSource + ReportSink,
{
    settings: S,
    io: T,
}

impl<S, T> PairSumSession<S, T>
where
    S: SessionSettings,
    T: LineSource + ReportSink,
{
    pub fn new(settings: S, io: T) -> Self {
        Self { settings, io }
    }

    /// Input errors end the run with an `InvalidInput` report rather than an
    /// `Err`; only I/O and serialization failures are returned as errors.
    pub fn run(&mut self) -> Result<Report> {
        let report = match self.search() {
            Ok(report) => report,
            Err(e) if e.is_input_error() => {
                tracing::info!("rejected input: {}", e);
                Report::InvalidInput {
                    kind: match &e {
                        PairSumError::InvalidTargetInput { .. } => InputKind::Target,
                        _ => InputKind::List,
                    },
                    message: e.user_friendly_message(),
                }
            }
            Err(e) => return Err(e),
        };

        self.io.emit(&report, self.settings.output_format())?;
        Ok(report)
    }

    fn search(&mut self) -> Result<Report> {
        let list_line = match self.settings.numbers() {
            Some(numbers) => numbers.to_string(),
            None => self.ask(InputKind::List)?,
        };
        let sequence = parse_sequence(&list_line)?;
        tracing::debug!(len = sequence.len(), "parsed sequence");

        let target_line = match self.settings.target() {
            Some(target) => target.to_string(),
            None => self.ask(InputKind::Target)?,
        };
        let target = parse_target(&target_line)?;
        tracing::debug!(target, "parsed target");

        let report = match find_pair(&sequence, target) {
            Some(indices) => Report::Found {
                indices,
                first_value: sequence[indices.first],
                second_value: sequence[indices.second],
                target,
            },
            None => Report::NotFound { target },
        };
        Ok(report)
    }

    fn ask(&mut self, kind: InputKind) -> Result<String> {
        let prompt = match kind {
            InputKind::List => self.settings.list_prompt(),
            InputKind::Target => self.settings.target_prompt(),
        };
        // end of input reads as an empty line
        let line = self.io.read_line(prompt)?.unwrap_or_default();
        Ok(line)
    }

    pub fn into_parts(self) -> (S, T) {
        (self.settings, self.io)
    }
}
