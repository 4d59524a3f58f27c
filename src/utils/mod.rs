//! Utility functions module
//!
//! This module contains utility functions used throughout the application.

pub mod format;
pub mod logging;
pub mod signals;

// Re-export main functions
pub use logging::init_tracing;
pub use signals::shutdown_signal;
