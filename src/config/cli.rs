use crate::core::render::render;
use crate::domain::model::{OutputFormat, Report};
use crate::domain::ports::{LineSource, ReportSink};
use crate::utils::error::Result;
use std::io::{self, BufRead, Write};

/// Line-oriented terminal: answers come from `reader`, reports go to `writer`.
///
/// Prompts go to `writer` as well unless a separate prompt writer is set with
/// [`Console::prompts_to`], which keeps `writer` clean for JSON reports.
pub struct Console<R, W, P = io::Sink> {
    reader: R,
    writer: W,
    prompts: Option<P>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            prompts: None,
        }
    }
}

impl<R: BufRead, W: Write, P: Write> Console<R, W, P> {
    /// `None` keeps prompts on the report writer.
    pub fn prompts_to<Q: Write>(self, prompts: Option<Q>) -> Console<R, W, Q> {
        Console {
            reader: self.reader,
            writer: self.writer,
            prompts,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write, P: Write> LineSource for Console<R, W, P> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.prompts.as_mut() {
            Some(prompts) => {
                write!(prompts, "{}", prompt)?;
                prompts.flush()?;
            }
            None => {
                write!(self.writer, "{}", prompt)?;
                self.writer.flush()?;
            }
        }

        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        // invalid UTF-8 becomes U+FFFD and then fails integer parsing
        let decoded = String::from_utf8_lossy(&bytes);
        Ok(Some(decoded.trim_end_matches(['\n', '\r']).to_string()))
    }
}

impl<R: BufRead, W: Write, P: Write> ReportSink for Console<R, W, P> {
    fn emit(&mut self, report: &Report, format: OutputFormat) -> Result<()> {
        let rendered = render(report, format)?;
        writeln!(self.writer, "{}", rendered)?;
        self.writer.flush()?;
        Ok(())
    }
}
