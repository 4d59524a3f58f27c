//! Side-effecting services
//!
//! Saving/loading state on disk and alerting the user when a run completes.

pub mod notification;
pub mod persistence;

// Re-export main functions
pub use notification::alert_completion;
pub use persistence::{load_state, save_state, SavedState};
