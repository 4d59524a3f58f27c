//! Duration and timestamp formatting shared by the view and the state file

use chrono::{Duration, NaiveDateTime, ParseResult};

/// Timestamp layout used by the saved state file
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Label shown when no time has been counted
pub const ZERO_LABEL: &str = "00:00:00";

/// Format a duration as a zero-padded `HH:MM:SS` timer label.
///
/// Fractional seconds are truncated and negative durations clamp to zero.
/// Hours are not wrapped, so a 100 hour stopwatch shows `100:00:00`.
pub fn format_label(duration: Duration) -> String {
    let (hours, minutes, seconds) = split_seconds(duration);
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format a duration as `H:MM:SS`, the layout stored in the state file
pub fn format_elapsed(duration: Duration) -> String {
    let (hours, minutes, seconds) = split_seconds(duration);
    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format a wall-clock instant for the state file
pub fn format_timestamp(instant: NaiveDateTime) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a wall-clock instant written by [`format_timestamp`]
pub fn parse_timestamp(value: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
}

fn split_seconds(duration: Duration) -> (i64, i64, i64) {
    let total = duration.num_seconds().max(0);
    (total / 3600, (total % 3600) / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_zero_padded_and_truncated() {
        assert_eq!(format_label(Duration::zero()), ZERO_LABEL);
        assert_eq!(format_label(Duration::minutes(25)), "00:25:00");
        assert_eq!(format_label(Duration::milliseconds(1_999)), "00:00:01");
        assert_eq!(format_label(Duration::hours(100)), "100:00:00");
    }

    #[test]
    fn negative_durations_clamp_to_zero() {
        assert_eq!(format_label(Duration::seconds(-4)), ZERO_LABEL);
        assert_eq!(format_elapsed(Duration::seconds(-4)), "0:00:00");
    }

    #[test]
    fn elapsed_uses_unpadded_hours() {
        assert_eq!(format_elapsed(Duration::seconds(3 * 3600 + 62)), "3:01:02");
    }

    #[test]
    fn timestamps_use_the_state_file_layout() {
        let instant = parse_timestamp("2024-03-09 07:05:01").unwrap();
        assert_eq!(format_timestamp(instant), "2024-03-09 07:05:01");
        assert!(parse_timestamp("2024-03-09T07:05:01").is_err());
    }
}
