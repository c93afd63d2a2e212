//! Output formatting for match, ranking, ATS, and insights results

pub mod formatter;
pub mod report;

pub use formatter::{formatter_for, ConsoleFormatter, JsonFormatter, MarkdownFormatter, OutputFormatter};
pub use report::{MatchReport, RankingReport, Report};
