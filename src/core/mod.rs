pub mod finder;
pub mod parser;
pub mod render;
pub mod session;

pub use crate::domain::model::{IndexPair, InputKind, OutputFormat, Report};
pub use crate::domain::ports::{LineSource, ReportSink, SessionSettings};
pub use crate::utils::error::Result;
