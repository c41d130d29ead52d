use std::fmt;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum IssueType {
    Todo,
    Bug,
    Fix,
    New,
}

impl IssueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Todo => "TODO",
            IssueType::Bug => "BUG",
            IssueType::Fix => "FIX",
            IssueType::New => "NEW",
        }
    }

    /// Exact, case-sensitive tag lookup.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "TODO" => Some(IssueType::Todo),
            "BUG" => Some(IssueType::Bug),
            "FIX" => Some(IssueType::Fix),
            "NEW" => Some(IssueType::New),
            _ => None,
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One annotation occurrence, as uploaded to the store.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Issue {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub priority: u8,
    pub title: String,
    pub description: String,
    pub file: String,
    pub line: u32,
    pub link: String,
    pub category: String,
    pub created_at: Option<String>,
    pub estimate_min: f64,
    pub estimate_max: f64,
}

/// A row as returned by the store. Only `link` is needed for reconciliation,
/// the remaining columns are kept as-is.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StoredIssue {
    pub link: String,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub columns: Map<String, Value>,
}

impl StoredIssue {
    pub fn from_link(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            id: None,
            category: None,
            created_at: None,
            columns: Map::new(),
        }
    }
}

impl From<&Issue> for StoredIssue {
    fn from(issue: &Issue) -> Self {
        let mut stored = StoredIssue::from_link(issue.link.clone());
        stored.category = Some(issue.category.clone());
        stored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_issue_serializes_store_columns() {
        let issue = Issue {
            issue_type: IssueType::Bug,
            priority: 2,
            title: "Crash on empty input".to_string(),
            description: String::new(),
            file: "src/lib.rs".to_string(),
            line: 7,
            link: "https://github.com/org/repo/blob/abc/src/lib.rs#L7".to_string(),
            category: "repo".to_string(),
            created_at: None,
            estimate_min: 0.5,
            estimate_max: 1.0,
        };

        let value = serde_json::to_value(&issue).unwrap();
        assert_eq!(value["type"], "BUG");
        assert_eq!(value["priority"], 2);
        assert_eq!(value["created_at"], Value::Null);
        assert_eq!(value["estimate_max"], 1.0);
        assert!(value.get("issue_type").is_none());
    }

    #[test]
    fn test_stored_issue_keeps_unknown_columns() {
        let row = json!({
            "id": 17,
            "link": "https://github.com/org/repo/blob/abc/a.rs#L1",
            "category": "repo",
            "created_at": "2024-01-01T00:00:00Z",
            "title": "Old title",
            "description": null
        });

        let stored: StoredIssue = serde_json::from_value(row).unwrap();
        assert_eq!(stored.link, "https://github.com/org/repo/blob/abc/a.rs#L1");
        assert_eq!(stored.id, Some(json!(17)));
        assert_eq!(stored.category.as_deref(), Some("repo"));
        assert_eq!(stored.columns["title"], "Old title");
        assert_eq!(stored.columns["description"], Value::Null);
    }

    #[test]
    fn test_issue_type_tags_are_case_sensitive() {
        assert_eq!(IssueType::from_tag("FIX"), Some(IssueType::Fix));
        assert_eq!(IssueType::from_tag("fix"), None);
        assert_eq!(IssueType::from_tag("TODOS"), None);
    }
}
