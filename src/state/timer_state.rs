//! Timer state structure and transitions

use chrono::{Duration, NaiveDateTime};

/// Label shown when Start receives something that is not a whole number
pub const INVALID_INPUT: &str = "Invalid input!";

/// Whether a run counts down to a target or up from zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    Countdown,
    Stopwatch,
}

/// Coarse phase derived from the raw timer fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running(TimerMode),
    Paused,
    Stopped,
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer is not running; nothing to render
    Idle,
    /// Timer is running; show this duration
    Display(Duration),
    /// Countdown just reached zero
    Completed,
}

/// Countdown/stopwatch state.
///
/// `elapsed_time` is only authoritative while the timer is not running; while
/// running, elapsed time is `now - start_time`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    pub running: bool,
    pub paused: bool,
    /// Instant the current run (or resume) began
    pub start_time: Option<NaiveDateTime>,
    /// Instant a countdown completes; `None` in stopwatch mode
    pub end_time: Option<NaiveDateTime>,
    pub elapsed_time: Duration,
}

impl TimerState {
    /// Create an idle timer
    pub fn new() -> Self {
        Self {
            running: false,
            paused: false,
            start_time: None,
            end_time: None,
            elapsed_time: Duration::zero(),
        }
    }

    pub fn mode(&self) -> TimerMode {
        if self.end_time.is_some() {
            TimerMode::Countdown
        } else {
            TimerMode::Stopwatch
        }
    }

    pub fn phase(&self) -> TimerPhase {
        if self.running {
            TimerPhase::Running(self.mode())
        } else if self.paused {
            TimerPhase::Paused
        } else if self.start_time.is_some() {
            TimerPhase::Stopped
        } else {
            TimerPhase::Idle
        }
    }

    /// Start or resume the timer.
    ///
    /// A paused timer resumes with its accumulated time. Otherwise `input` is
    /// read as a number of minutes: a positive integer starts a countdown,
    /// an empty field or a non-positive integer starts a stopwatch. Anything
    /// else is rejected and the state is left as it was.
    pub fn start(&mut self, input: &str, now: NaiveDateTime) -> Result<(), String> {
        if self.running {
            return Ok(());
        }

        if self.paused {
            self.start_time = Some(now - self.elapsed_time);
        } else {
            let end_time = match parse_minutes(input)? {
                Some(minutes) => Some(
                    Duration::try_minutes(minutes)
                        .and_then(|countdown| now.checked_add_signed(countdown))
                        .ok_or_else(|| INVALID_INPUT.to_string())?,
                ),
                None => None,
            };
            self.end_time = end_time;
            self.start_time = Some(now);
        }

        self.running = true;
        self.paused = false;
        Ok(())
    }

    /// Pause a running timer. Returns false when there was nothing to pause.
    pub fn pause(&mut self, now: NaiveDateTime) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed_time = self.running_elapsed(now);
        self.running = false;
        self.paused = true;
        true
    }

    /// Stop a running or paused timer, freezing the elapsed time at
    /// `now - start_time`.
    ///
    /// Returns true when the stop counts as a completion.
    pub fn stop(&mut self, now: NaiveDateTime) -> bool {
        if !self.running && !self.paused {
            return false;
        }
        self.elapsed_time = self.running_elapsed(now);
        self.running = false;
        self.paused = false;
        true
    }

    /// Return to the idle state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Evaluate the timer at `now`.
    ///
    /// A countdown whose end has been reached stops itself and reports
    /// [`TickOutcome::Completed`] once; later ticks see a stopped timer.
    pub fn tick(&mut self, now: NaiveDateTime) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        match self.end_time {
            Some(end_time) => {
                let remaining = end_time - now;
                if remaining > Duration::zero() {
                    TickOutcome::Display(remaining)
                } else {
                    self.elapsed_time = self.running_elapsed(now);
                    self.running = false;
                    TickOutcome::Completed
                }
            }
            None => TickOutcome::Display(self.running_elapsed(now)),
        }
    }

    /// Check the invariants a restored state must satisfy
    pub fn validate(&self) -> Result<(), String> {
        if self.running && self.paused {
            return Err("timer cannot be both running and paused".to_string());
        }
        if self.running && self.start_time.is_none() {
            return Err("running timer has no start time".to_string());
        }
        if self.elapsed_time < Duration::zero() {
            return Err("elapsed time is negative".to_string());
        }
        Ok(())
    }

    fn running_elapsed(&self, now: NaiveDateTime) -> Duration {
        self.start_time
            .map(|start| now - start)
            .unwrap_or_else(Duration::zero)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the minutes field. `Ok(None)` selects stopwatch mode.
fn parse_minutes(input: &str) -> Result<Option<i64>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    let minutes: i64 = input.parse().map_err(|_| INVALID_INPUT.to_string())?;
    Ok((minutes > 0).then_some(minutes))
}
