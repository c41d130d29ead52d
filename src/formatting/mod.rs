pub mod issues;
pub mod summary;
pub mod utils;

pub use issues::{print_issues, print_links};
pub use summary::{print_plan, print_summary};
pub use utils::{truncate, format_priority, format_issue_type, format_estimate};
