pub mod reconciler;

pub use reconciler::{reconcile, SyncOptions, SyncPlan, SyncSummary};
