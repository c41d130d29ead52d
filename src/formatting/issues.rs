use colored::*;

use crate::models::Issue;
use super::utils::*;

pub fn print_issues(issues: &[Issue]) {
    if issues.is_empty() {
        println!("{}", "  (none)".dimmed());
        return;
    }

    for issue in issues {
        println!(
            "  {} {} {:<8} {:<50} {}",
            format_issue_type(issue.issue_type),
            format_priority(issue.priority),
            format_estimate(issue.estimate_min, issue.estimate_max).dimmed(),
            truncate(&issue.title, 50),
            format!("{}:{}", issue.file, issue.line).bright_black()
        );
    }
}

pub fn print_links(links: &[String]) {
    if links.is_empty() {
        println!("{}", "  (none)".dimmed());
        return;
    }

    for link in links {
        println!("  {} {}", "-".red(), link.bright_black());
    }
}
