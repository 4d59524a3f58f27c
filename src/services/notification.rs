//! Completion alerts: terminal bell plus a desktop notification

use std::io;

use crossterm::{execute, style::Print};
use notify_rust::Notification;
use tracing::{debug, warn};

/// Title used for dialogs and desktop notifications
pub const APP_TITLE: &str = "Timer";

/// Message shown when a run completes
pub const COMPLETION_MESSAGE: &str = "Time's up!";

/// Ring the bell and post a desktop notification.
///
/// The desktop notification is sent from a blocking task because the D-Bus
/// call can stall; failures are only logged.
pub fn alert_completion() {
    if let Err(e) = ring_bell() {
        warn!("Failed to ring terminal bell: {}", e);
    }

    tokio::task::spawn_blocking(|| {
        if let Err(e) = send_notification(COMPLETION_MESSAGE) {
            warn!("Failed to send desktop notification: {}", e);
        }
    });
}

fn ring_bell() -> io::Result<()> {
    execute!(io::stdout(), Print('\u{7}'))
}

fn send_notification(message: &str) -> Result<(), notify_rust::error::Error> {
    Notification::new()
        .summary(APP_TITLE)
        .body(message)
        .appname("advanced-timer")
        .icon("alarm-clock")
        .show()?;
    debug!("Desktop notification sent");
    Ok(())
}
