//! Application configuration
//!
//! The timer takes no command line flags and reads no environment variables,
//! so everything here is fixed at build time.

use std::{path::PathBuf, time::Duration};

use crate::theme::Theme;

/// File the timer state is saved to, relative to the working directory
pub const STATE_FILE_NAME: &str = "timer_state.json";

/// Log file name, placed in the OS temp directory
pub const LOG_FILE_NAME: &str = "advanced-timer.log";

/// Interval between ticks
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Log level for the crate's own events
pub const LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    /// Where Save writes and Load reads
    pub state_file: PathBuf,
    /// Where tracing output goes; the terminal belongs to the UI
    pub log_file: PathBuf,
    /// Period of the timer and clock refresh
    pub tick_interval: Duration,
    /// Theme applied at launch
    pub theme: Theme,
}

impl Config {
    /// Filter directive for the tracing subscriber
    pub fn log_filter(&self) -> String {
        format!("advanced_timer={}", LOG_LEVEL)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_file: PathBuf::from(STATE_FILE_NAME),
            log_file: std::env::temp_dir().join(LOG_FILE_NAME),
            tick_interval: TICK_INTERVAL,
            theme: Theme::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_the_fixed_state_file() {
        let config = Config::default();
        assert_eq!(config.state_file, PathBuf::from("timer_state.json"));
        assert_eq!(config.tick_interval, Duration::from_secs(1));
        assert_eq!(config.theme, Theme::Dark);
    }

    #[test]
    fn log_filter_targets_this_crate() {
        assert_eq!(Config::default().log_filter(), "advanced_timer=info");
    }
}
