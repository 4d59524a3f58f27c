//! Advanced Timer - a terminal countdown and stopwatch
//!
//! This library provides the timer state machine, saving and loading of the
//! timer to a JSON file, dark/light themes and the terminal interface.

pub mod clock;
pub mod config;
pub mod services;
pub mod state;
pub mod tasks;
pub mod theme;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use state::{AppState, Notice, TimerState};
pub use tasks::run_event_loop;
pub use theme::Theme;
