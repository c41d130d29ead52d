use colored::*;

use crate::models::IssueType;

pub fn format_priority(priority: u8) -> ColoredString {
    let label = format!("P{}", priority);
    match priority {
        5 => label.red().bold(),
        4 => label.red(),
        3 => label.yellow(),
        2 => label.normal(),
        _ => label.dimmed(),
    }
}

pub fn format_issue_type(issue_type: IssueType) -> ColoredString {
    match issue_type {
        IssueType::Bug => "BUG ".red().bold(),
        IssueType::Fix => "FIX ".yellow(),
        IssueType::New => "NEW ".green(),
        IssueType::Todo => "TODO".cyan(),
    }
}

pub fn format_estimate(min: f64, max: f64) -> String {
    format!("{}-{}h", min, max)
}

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
