//! State management module
//!
//! The timer state machine and the controller that wraps it for the view.

pub mod app_state;
pub mod timer_state;

// Re-export main types
pub use app_state::{AppState, Notice};
pub use timer_state::{TickOutcome, TimerMode, TimerPhase, TimerState};
