use std::collections::HashSet;

use crate::client::IssueStore;
use crate::error::SyncResult;
use crate::logging::{log_info, log_warn};
use crate::models::{Issue, StoredIssue};

/// What a sync run would change in the store, keyed by `link`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncPlan {
    /// Links of stored rows that no longer appear in the report.
    pub to_delete: Vec<String>,
    /// Fresh issues not yet stored.
    pub to_create: Vec<Issue>,
    /// Fresh issues already present in the store.
    pub unchanged: usize,
}

impl SyncPlan {
    pub fn compute(fresh: &[Issue], stored: &[StoredIssue]) -> Self {
        let fresh_links: HashSet<&str> = fresh.iter().map(|i| i.link.as_str()).collect();
        let stored_links: HashSet<&str> = stored.iter().map(|s| s.link.as_str()).collect();

        let mut seen = HashSet::new();
        let to_delete = stored
            .iter()
            .filter(|s| !fresh_links.contains(s.link.as_str()))
            .filter(|s| seen.insert(s.link.as_str()))
            .map(|s| s.link.clone())
            .collect();

        let mut seen = HashSet::new();
        let mut unchanged = 0;
        let mut to_create = Vec::new();
        for issue in fresh {
            if !seen.insert(issue.link.as_str()) {
                log_warn(&format!("Duplicate annotation ignored: {}", issue.link));
                continue;
            }
            if stored_links.contains(issue.link.as_str()) {
                unchanged += 1;
            } else {
                to_create.push(issue.clone());
            }
        }

        Self {
            to_delete,
            to_create,
            unchanged,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_delete.is_empty() && self.to_create.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    pub dry_run: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncSummary {
    pub stored: usize,
    pub unchanged: usize,
    pub deleted: usize,
    pub inserted: usize,
    pub delete_failed: bool,
    pub dry_run: bool,
}

/// Brings the store's rows for `category` in line with `fresh`.
///
/// A failed delete is logged and the run carries on to the insert; a failed
/// insert is returned as an error.
pub async fn reconcile<S: IssueStore>(
    store: &S,
    category: &str,
    fresh: &[Issue],
    options: SyncOptions,
) -> SyncResult<(SyncPlan, SyncSummary)> {
    log_info(&format!("Fetching existing issues for category: {}", category));
    let stored = store.list_by_category(category).await;
    log_info(&format!("Found {} existing issues", stored.len()));

    let plan = SyncPlan::compute(fresh, &stored);
    let mut summary = SyncSummary {
        stored: stored.len(),
        unchanged: plan.unchanged,
        dry_run: options.dry_run,
        ..SyncSummary::default()
    };

    if options.dry_run {
        log_info(&format!(
            "Dry run: would delete {} and insert {} issues",
            plan.to_delete.len(),
            plan.to_create.len()
        ));
        return Ok((plan, summary));
    }

    if plan.to_delete.is_empty() {
        log_info("No stale issues to delete");
    } else if store.delete_by_links(&plan.to_delete).await {
        summary.deleted = plan.to_delete.len();
    } else {
        summary.delete_failed = true;
    }

    if plan.to_create.is_empty() {
        log_info("No new issues to upload");
    } else {
        store.insert_issues(&plan.to_create).await?;
        summary.inserted = plan.to_create.len();
    }

    Ok((plan, summary))
}
