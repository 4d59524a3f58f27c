//! Saving and restoring the timer state as JSON

use std::{fs, path::Path};

use anyhow::{anyhow, bail, Context};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    state::TimerState,
    utils::format::{format_elapsed, format_timestamp, parse_timestamp},
};

/// On-disk layout of the timer state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    pub running: bool,
    pub paused: bool,
    /// `%Y-%m-%d %H:%M:%S` or null
    pub start_time: Option<String>,
    /// `H:MM:SS`
    pub elapsed_time: String,
    /// `%Y-%m-%d %H:%M:%S` or null
    pub end_time: Option<String>,
}

impl SavedState {
    pub fn from_timer(timer: &TimerState) -> Self {
        Self {
            running: timer.running,
            paused: timer.paused,
            start_time: timer.start_time.map(format_timestamp),
            elapsed_time: format_elapsed(timer.elapsed_time),
            end_time: timer.end_time.map(format_timestamp),
        }
    }

    /// Rebuild a timer from the saved fields.
    ///
    /// Only the seconds field of `elapsed_time` is read back, so hours and
    /// minutes of accumulated time are dropped. Files written by earlier
    /// versions depend on this.
    pub fn into_timer(self) -> anyhow::Result<TimerState> {
        let start_time = self
            .start_time
            .as_deref()
            .map(parse_timestamp)
            .transpose()
            .context("invalid start_time")?;
        let end_time = self
            .end_time
            .as_deref()
            .map(parse_timestamp)
            .transpose()
            .context("invalid end_time")?;

        let timer = TimerState {
            running: self.running,
            paused: self.paused,
            start_time,
            end_time,
            elapsed_time: parse_elapsed_seconds(&self.elapsed_time)?,
        };
        timer.validate().map_err(|e| anyhow!(e))?;
        Ok(timer)
    }
}

/// Write the timer to `path`, replacing any previous file
pub fn save_state(path: &Path, timer: &TimerState) -> anyhow::Result<()> {
    let json = serde_json::to_string(&SavedState::from_timer(timer))?;
    fs::write(path, json).with_context(|| format!("cannot write {}", path.display()))?;
    info!("Saved timer state to {}", path.display());
    Ok(())
}

/// Read a timer back from `path`
pub fn load_state(path: &Path) -> anyhow::Result<TimerState> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    let saved: SavedState = serde_json::from_str(&contents)
        .with_context(|| format!("malformed state file {}", path.display()))?;
    debug!("Read saved state: {:?}", saved);

    let timer = saved.into_timer()?;
    info!("Loaded timer state from {}", path.display());
    Ok(timer)
}

fn parse_elapsed_seconds(value: &str) -> anyhow::Result<Duration> {
    let field = value
        .split(':')
        .nth(2)
        .ok_or_else(|| anyhow!("elapsed_time {:?} has no seconds field", value))?;
    let seconds: f64 = field
        .trim()
        .parse()
        .with_context(|| format!("invalid seconds in elapsed_time {:?}", value))?;
    if !seconds.is_finite() || !(0.0..86_400.0).contains(&seconds) {
        bail!("seconds out of range in elapsed_time {:?}", value);
    }
    Ok(Duration::milliseconds((seconds * 1000.0) as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn serializes_the_expected_fields() {
        let timer = TimerState {
            running: true,
            paused: false,
            start_time: Some(at(10, 0, 0)),
            end_time: Some(at(10, 25, 0)),
            elapsed_time: Duration::seconds(3_723),
        };
        let value = serde_json::to_value(SavedState::from_timer(&timer)).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "running": true,
                "paused": false,
                "start_time": "2024-02-29 10:00:00",
                "elapsed_time": "1:02:03",
                "end_time": "2024-02-29 10:25:00",
            })
        );
    }

    #[test]
    fn idle_timer_saves_nulls() {
        let value = serde_json::to_value(SavedState::from_timer(&TimerState::new())).unwrap();
        assert!(value["start_time"].is_null());
        assert!(value["end_time"].is_null());
        assert_eq!(value["elapsed_time"], "0:00:00");
    }

    #[test]
    fn elapsed_time_keeps_only_seconds() {
        assert_eq!(parse_elapsed_seconds("1:02:03").unwrap(), Duration::seconds(3));
        assert_eq!(
            parse_elapsed_seconds("0:00:05.250000").unwrap(),
            Duration::milliseconds(5_250)
        );
        assert!(parse_elapsed_seconds("5").is_err());
        assert!(parse_elapsed_seconds("0:00:xx").is_err());
        assert!(parse_elapsed_seconds("0:00:-1").is_err());
    }

    #[test]
    fn rejects_bad_timestamps() {
        let saved = SavedState {
            running: false,
            paused: true,
            start_time: Some("yesterday".to_string()),
            elapsed_time: "0:00:01".to_string(),
            end_time: None,
        };
        let err = saved.into_timer().unwrap_err();
        assert!(format!("{:#}", err).contains("start_time"));
    }

    #[test]
    fn rejects_running_and_paused_together() {
        let saved = SavedState {
            running: true,
            paused: true,
            start_time: Some("2024-02-29 10:00:00".to_string()),
            elapsed_time: "0:00:00".to_string(),
            end_time: None,
        };
        assert!(saved.into_timer().is_err());
    }
}
