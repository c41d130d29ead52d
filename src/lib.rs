// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod report;
pub mod sync;


// Re-export commonly used items
pub use client::{IssueStore, StoreClient};
pub use config::SyncConfig;
pub use error::{SyncError, SyncResult};
pub use models::*;
