pub mod sync;

pub use sync::{handle_sync, run_sync};
