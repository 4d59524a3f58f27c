//! Main application state: the timer plus everything the view shows

use std::{collections::VecDeque, path::PathBuf};

use chrono::{NaiveDateTime, Timelike};
use tracing::{debug, error, info, warn};

use super::{timer_state::TickOutcome, TimerState};
use crate::{
    clock::Clock,
    config::Config,
    services::persistence,
    theme::Theme,
    utils::format::{format_label, ZERO_LABEL},
};

/// Something the user has to be told about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A run finished, by countdown expiry or by Stop
    Completed,
    Info(String),
    Error(String),
}

/// Controller owning the timer state and the text the view renders
pub struct AppState {
    timer: TimerState,
    clock: Box<dyn Clock>,
    state_file: PathBuf,
    /// Active visual preset
    pub theme: Theme,
    /// Contents of the minutes entry
    pub entry: String,
    /// Large countdown/elapsed label
    pub timer_label: String,
    /// Small wall-clock label
    pub clock_label: String,
    notices: VecDeque<Notice>,
}

impl AppState {
    /// Create an idle controller
    pub fn new(config: &Config, clock: Box<dyn Clock>) -> Self {
        let mut state = Self {
            timer: TimerState::new(),
            clock,
            state_file: config.state_file.clone(),
            theme: config.theme,
            entry: String::new(),
            timer_label: ZERO_LABEL.to_string(),
            clock_label: String::new(),
            notices: VecDeque::new(),
        };
        state.refresh_clock_label();
        state
    }

    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    /// Start or resume using the entry contents
    pub fn start(&mut self) {
        let now = self.now();
        match self.timer.start(&self.entry, now) {
            Ok(()) => {
                info!("Timer started: {:?}", self.timer.phase());
                self.render_timer();
            }
            Err(message) => {
                warn!("Rejected timer input {:?}", self.entry);
                self.timer_label = message;
            }
        }
    }

    pub fn pause(&mut self) {
        if self.timer.pause(self.now()) {
            info!("Timer paused at {}", format_label(self.timer.elapsed_time));
        }
    }

    pub fn stop(&mut self) {
        if self.timer.stop(self.now()) {
            info!("Timer stopped at {}", format_label(self.timer.elapsed_time));
            self.notices.push_back(Notice::Completed);
        }
    }

    pub fn reset(&mut self) {
        self.timer.reset();
        self.timer_label = ZERO_LABEL.to_string();
        info!("Timer reset");
    }

    /// Periodic refresh: clock label always, timer label while running
    pub fn tick(&mut self) {
        self.refresh_clock_label();
        self.render_timer();
    }

    pub fn refresh_clock_label(&mut self) {
        let now = self.now();
        self.clock_label = format!("Current Time: {}", now.format("%H:%M:%S"));
    }

    /// Save the timer to the state file
    pub fn save_state(&mut self) {
        match persistence::save_state(&self.state_file, &self.timer) {
            Ok(()) => self.notify(Notice::Info("State saved successfully!".to_string())),
            Err(e) => {
                error!("Failed to save state: {:#}", e);
                self.notify(Notice::Error(format!("Failed to save state: {:#}", e)));
            }
        }
    }

    /// Replace the timer with the one in the state file.
    ///
    /// On any failure the current timer is kept.
    pub fn load_state(&mut self) {
        match persistence::load_state(&self.state_file) {
            Ok(timer) => {
                self.timer = timer;
                if self.timer.running {
                    self.render_timer();
                }
                self.notify(Notice::Info("State loaded successfully!".to_string()));
            }
            Err(e) => {
                error!("Failed to load state: {:#}", e);
                self.notify(Notice::Error(format!("Failed to load state: {:#}", e)));
            }
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        info!("Switching to {} theme", theme.name());
        self.theme = theme;
    }

    /// Take every notice raised since the last call
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    fn render_timer(&mut self) {
        match self.timer.tick(self.now()) {
            TickOutcome::Idle => {}
            TickOutcome::Display(duration) => {
                self.timer_label = format_label(duration);
                debug!("Tick: {}", self.timer_label);
            }
            TickOutcome::Completed => {
                info!("Countdown complete");
                self.timer_label = ZERO_LABEL.to_string();
                self.notices.push_back(Notice::Completed);
            }
        }
    }

    /// Current time at whole-second precision, the precision the state file keeps
    fn now(&self) -> NaiveDateTime {
        let now = self.clock.now();
        now.with_nanosecond(0).unwrap_or(now)
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }
}
