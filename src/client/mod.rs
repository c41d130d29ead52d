pub mod store_client;

use std::future::Future;

use crate::error::SyncResult;
use crate::models::{Issue, StoredIssue};

pub use store_client::StoreClient;

/// Operations the reconciler needs from the remote issue table.
///
/// Failure handling is deliberately uneven: listing and deleting never fail
/// the run, inserting does.
pub trait IssueStore {
    /// All stored rows whose `category` equals `category`. Empty on failure.
    fn list_by_category(&self, category: &str) -> impl Future<Output = Vec<StoredIssue>> + Send;

    /// Inserts all `issues` in one request.
    fn insert_issues(&self, issues: &[Issue]) -> impl Future<Output = SyncResult<()>> + Send;

    /// Deletes every row whose `link` is in `links`. Returns whether the
    /// store accepted the request.
    fn delete_by_links(&self, links: &[String]) -> impl Future<Output = bool> + Send;
}
