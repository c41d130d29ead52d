use std::io::Write;
use std::sync::Mutex;

use todo_sync::cli_context::SyncContextBuilder;
use todo_sync::commands::run_sync;
use todo_sync::report::parse_report;
use todo_sync::sync::{reconcile, SyncOptions};
use todo_sync::{Issue, IssueStore, IssueType, RepositoryRef, StoredIssue, SyncConfig, SyncError, SyncResult};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    List(String),
    Insert(Vec<String>),
    Delete(Vec<String>),
}

#[derive(Default)]
struct MemoryStore {
    rows: Mutex<Vec<StoredIssue>>,
    calls: Mutex<Vec<Call>>,
    fail_list: bool,
    fail_delete: bool,
    fail_insert: bool,
}

impl MemoryStore {
    fn with_rows(rows: Vec<StoredIssue>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn links(&self) -> Vec<String> {
        let mut links: Vec<String> = self.rows.lock().unwrap().iter().map(|r| r.link.clone()).collect();
        links.sort();
        links
    }
}

impl IssueStore for MemoryStore {
    async fn list_by_category(&self, category: &str) -> Vec<StoredIssue> {
        self.calls.lock().unwrap().push(Call::List(category.to_string()));
        if self.fail_list {
            return Vec::new();
        }
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.category.as_deref() == Some(category))
            .cloned()
            .collect()
    }

    async fn insert_issues(&self, issues: &[Issue]) -> SyncResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Insert(issues.iter().map(|i| i.link.clone()).collect()));
        if self.fail_insert {
            return Err(SyncError::Upload("Status 500 Internal Server Error".to_string()));
        }
        self.rows.lock().unwrap().extend(issues.iter().map(StoredIssue::from));
        Ok(())
    }

    async fn delete_by_links(&self, links: &[String]) -> bool {
        self.calls.lock().unwrap().push(Call::Delete(links.to_vec()));
        if self.fail_delete {
            return false;
        }
        self.rows.lock().unwrap().retain(|r| !links.contains(&r.link));
        true
    }
}

fn repo() -> RepositoryRef {
    RepositoryRef::new("org/repo", "abc123")
}

fn issue(file: &str, line: u32) -> Issue {
    Issue {
        issue_type: IssueType::Todo,
        priority: 2,
        title: format!("{} {}", file, line),
        description: String::new(),
        file: file.to_string(),
        line,
        link: repo().link_for(file, line),
        category: "repo".to_string(),
        created_at: None,
        estimate_min: 1.0,
        estimate_max: 2.0,
    }
}

fn stored(file: &str, line: u32) -> StoredIssue {
    StoredIssue::from(&issue(file, line))
}

#[tokio::test]
async fn deletes_stale_and_inserts_new_only() {
    let store = MemoryStore::with_rows(vec![stored("a.rs", 1), stored("b.rs", 2), stored("c.rs", 3)]);
    let fresh = vec![issue("b.rs", 2), issue("c.rs", 3), issue("d.rs", 4)];

    let (_, summary) = reconcile(&store, "repo", &fresh, SyncOptions::default()).await.unwrap();

    assert_eq!(
        store.calls(),
        vec![
            Call::List("repo".to_string()),
            Call::Delete(vec![issue("a.rs", 1).link]),
            Call::Insert(vec![issue("d.rs", 4).link]),
        ]
    );
    assert_eq!(summary.deleted, 1);
    assert_eq!(summary.inserted, 1);
    assert_eq!(summary.unchanged, 2);
}

#[tokio::test]
async fn second_run_is_a_no_op() {
    let store = MemoryStore::default();
    let fresh = vec![issue("a.rs", 1), issue("b.rs", 2)];

    reconcile(&store, "repo", &fresh, SyncOptions::default()).await.unwrap();
    store.clear_calls();

    let (plan, summary) = reconcile(&store, "repo", &fresh, SyncOptions::default()).await.unwrap();

    assert!(plan.is_empty());
    assert_eq!(store.calls(), vec![Call::List("repo".to_string())]);
    assert_eq!(summary.inserted, 0);
    assert_eq!(summary.deleted, 0);
}

#[tokio::test]
async fn other_categories_are_left_alone() {
    let mut foreign = stored("x.rs", 1);
    foreign.category = Some("other".to_string());
    let store = MemoryStore::with_rows(vec![foreign.clone()]);

    reconcile(&store, "repo", &[issue("a.rs", 1)], SyncOptions::default()).await.unwrap();

    let links = store.links();
    assert!(links.contains(&foreign.link));
    assert!(links.contains(&issue("a.rs", 1).link));
}

#[tokio::test]
async fn delete_failure_does_not_stop_insert() {
    let store = MemoryStore {
        rows: Mutex::new(vec![stored("old.rs", 1)]),
        fail_delete: true,
        ..MemoryStore::default()
    };

    let (_, summary) = reconcile(&store, "repo", &[issue("new.rs", 1)], SyncOptions::default())
        .await
        .unwrap();

    assert!(summary.delete_failed);
    assert_eq!(summary.deleted, 0);
    assert_eq!(summary.inserted, 1);
    assert!(matches!(store.calls().last(), Some(Call::Insert(_))));
}

#[tokio::test]
async fn insert_failure_is_fatal() {
    let store = MemoryStore {
        fail_insert: true,
        ..MemoryStore::default()
    };

    let result = reconcile(&store, "repo", &[issue("new.rs", 1)], SyncOptions::default()).await;

    assert!(matches!(result, Err(SyncError::Upload(_))));
}

#[tokio::test]
async fn fetch_failure_is_treated_as_empty_store() {
    let store = MemoryStore {
        rows: Mutex::new(vec![stored("a.rs", 1)]),
        fail_list: true,
        ..MemoryStore::default()
    };

    let (plan, summary) = reconcile(&store, "repo", &[issue("a.rs", 1)], SyncOptions::default())
        .await
        .unwrap();

    assert!(plan.to_delete.is_empty());
    assert_eq!(plan.to_create, vec![issue("a.rs", 1)]);
    assert_eq!(summary.stored, 0);
    assert_eq!(summary.inserted, 1);
}

#[tokio::test]
async fn dry_run_makes_no_writes() {
    let store = MemoryStore::with_rows(vec![stored("old.rs", 1)]);

    let (plan, summary) = reconcile(&store, "repo", &[issue("new.rs", 1)], SyncOptions { dry_run: true })
        .await
        .unwrap();

    assert_eq!(plan.to_delete.len(), 1);
    assert_eq!(plan.to_create.len(), 1);
    assert!(summary.dry_run);
    assert_eq!(store.calls(), vec![Call::List("repo".to_string())]);
    assert_eq!(store.links(), vec![issue("old.rs", 1).link]);
}

#[tokio::test]
async fn unparseable_lines_never_reach_the_store() {
    let report = parse_report(
        "a.rs:1:TODO:6:1-2:Bad priority\na.rs:2:TODO:1:1-2:Good\nrandom noise\n",
        &repo(),
    );
    let store = MemoryStore::default();

    reconcile(&store, "repo", &report.issues, SyncOptions::default()).await.unwrap();

    assert_eq!(store.links(), vec![repo().link_for("a.rs", 2)]);
    assert_eq!(report.skipped.len(), 2);
}

#[tokio::test]
async fn run_sync_reads_report_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "path/to/file.py:42:TODO:3:0.5-2.0:Refactor this, needs cleanup").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "src/lib.rs:7:// BUG:5:1-4:Panics on empty input").unwrap();

    let config = SyncConfig::from_lookup(|key| match key {
        "TODO_URL" => Some("https://db.example.com".to_string()),
        "TODO_KEY" => Some("secret".to_string()),
        "GITHUB_REPO" => Some("org/repo".to_string()),
        "GITHUB_SHA" => Some("abc123".to_string()),
        _ => None,
    })
    .unwrap();
    let context = SyncContextBuilder::new()
        .with_config(config)
        .with_input_path(file.path())
        .build()
        .unwrap();

    let store = MemoryStore::with_rows(vec![stored("gone.rs", 1)]);
    let summary = run_sync(&context, &store).await.unwrap();

    assert_eq!(summary.inserted, 2);
    assert_eq!(summary.deleted, 1);
    assert_eq!(
        store.links(),
        vec![
            "https://github.com/org/repo/blob/abc123/path/to/file.py#L42".to_string(),
            "https://github.com/org/repo/blob/abc123/src/lib.rs#L7".to_string(),
        ]
    );
}

#[tokio::test]
async fn run_sync_skips_unparseable_lines() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "src/a.rs:3:TODO:7:1-2:Priority out of range").unwrap();
    writeln!(file, "src/a.rs:4:FIX:1:1-2:Kept").unwrap();

    let config = SyncConfig::from_lookup(|key| match key {
        "TODO_URL" => Some("https://db.example.com".to_string()),
        "TODO_KEY" => Some("secret".to_string()),
        "GITHUB_REPO" => Some("org/repo".to_string()),
        "GITHUB_SHA" => Some("abc123".to_string()),
        _ => None,
    })
    .unwrap();
    let context = SyncContextBuilder::new()
        .with_config(config)
        .with_input_path(file.path())
        .build()
        .unwrap();

    let store = MemoryStore::default();
    let summary = run_sync(&context, &store).await.unwrap();

    assert_eq!(summary.inserted, 1);
    assert_eq!(store.links(), vec![repo().link_for("src/a.rs", 4)]);
}

#[tokio::test]
async fn run_sync_fails_on_missing_report() {
    let config = SyncConfig::from_lookup(|key| match key {
        "TODO_URL" => Some("https://db.example.com".to_string()),
        "TODO_KEY" => Some("secret".to_string()),
        "GITHUB_REPO" => Some("org/repo".to_string()),
        "GITHUB_SHA" => Some("abc123".to_string()),
        _ => None,
    })
    .unwrap();
    let context = SyncContextBuilder::new()
        .with_config(config)
        .with_input_path("/nonexistent/issues.txt")
        .build()
        .unwrap();

    let store = MemoryStore::default();
    let result = run_sync(&context, &store).await;

    assert!(matches!(result, Err(SyncError::InvalidInput(_))));
    assert!(store.calls().is_empty());
}
