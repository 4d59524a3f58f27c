//! Long-running tasks
//!
//! This module contains the event loop that owns the application state.

pub mod event_loop;

// Re-export main functions
pub use event_loop::run_event_loop;
