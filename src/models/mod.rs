pub mod issue;
pub mod repository;

// Re-export commonly used types
pub use issue::{Issue, IssueType, StoredIssue};
pub use repository::RepositoryRef;
