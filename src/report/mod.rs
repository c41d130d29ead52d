pub mod parser;
pub mod reader;

pub use parser::{parse_issue_line, split_text};
pub use reader::{parse_report, read_report, ParsedReport, SkippedLine};
