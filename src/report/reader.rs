use std::fs;
use std::path::Path;

use crate::error::{SyncError, SyncResult};
use crate::logging::{log_debug, log_warn};
use crate::models::{Issue, RepositoryRef};

use super::parser::parse_issue_line;

/// A report line that did not match the annotation grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub number: usize,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct ParsedReport {
    pub issues: Vec<Issue>,
    pub skipped: Vec<SkippedLine>,
}

pub fn read_report(path: &Path, repository: &RepositoryRef) -> SyncResult<ParsedReport> {
    let contents = fs::read_to_string(path).map_err(|e| {
        SyncError::InvalidInput(format!("Cannot read report {}: {}", path.display(), e))
    })?;

    Ok(parse_report(&contents, repository))
}

pub fn parse_report(contents: &str, repository: &RepositoryRef) -> ParsedReport {
    let mut report = ParsedReport::default();

    for (index, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        log_debug(&format!("Parsing line: {}", line));

        match parse_issue_line(line, repository) {
            Some(issue) => {
                log_debug(&format!("Parsed {} P{} at {}:{}", issue.issue_type, issue.priority, issue.file, issue.line));
                report.issues.push(issue);
            }
            None => {
                log_warn(&format!("Skipping unparseable line {}: {}", index + 1, line));
                report.skipped.push(SkippedLine {
                    number: index + 1,
                    text: line.to_string(),
                });
            }
        }
    }

    report
}
