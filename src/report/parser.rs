use regex::Regex;

use crate::models::{Issue, IssueType, RepositoryRef};

lazy_static::lazy_static! {
    // file:line:[comment markers]TYPE:priority:min-max:text
    static ref ANNOTATION_RE: Regex = Regex::new(
        r"^([^:]+):([0-9]+):[/#\s]*(TODO|BUG|FIX|NEW):([1-5]):([0-9]*\.?[0-9]+)-([0-9]*\.?[0-9]+):(.+)$"
    ).expect("annotation pattern is valid");

    static ref LEADING_MARKERS_RE: Regex = Regex::new(r"^[/#\s]*").expect("marker pattern is valid");
}

/// Parses one report line into an issue. Returns `None` for anything that
/// does not follow the annotation grammar exactly.
pub fn parse_issue_line(line: &str, repository: &RepositoryRef) -> Option<Issue> {
    let caps = ANNOTATION_RE.captures(line.trim())?;

    let file = caps.get(1)?.as_str();
    let line_number: u32 = caps.get(2)?.as_str().parse().ok()?;
    if line_number == 0 {
        return None;
    }

    let issue_type = IssueType::from_tag(caps.get(3)?.as_str())?;
    let priority: u8 = caps.get(4)?.as_str().parse().ok()?;
    let estimate_min: f64 = caps.get(5)?.as_str().parse().ok()?;
    let estimate_max: f64 = caps.get(6)?.as_str().parse().ok()?;

    let (title, description) = split_text(caps.get(7)?.as_str());
    if title.is_empty() {
        return None;
    }

    Some(Issue {
        issue_type,
        priority,
        title,
        description,
        file: file.to_string(),
        line: line_number,
        link: repository.link_for(file, line_number),
        category: repository.category().to_string(),
        created_at: None,
        estimate_min,
        estimate_max,
    })
}

/// Splits free text into `(title, description)` on the first comma.
pub fn split_text(text: &str) -> (String, String) {
    let cleaned = LEADING_MARKERS_RE.replace(text.trim(), "");

    match cleaned.split_once(',') {
        Some((title, description)) => (title.trim().to_string(), description.trim().to_string()),
        None => (cleaned.trim().to_string(), String::new()),
    }
}
