//! Main event loop: key presses, the one-second tick and shutdown signals

use anyhow::Context;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::{
    config::Config,
    services::alert_completion,
    state::AppState,
    ui::{input::handle_key, terminal::Tui, view, UiState},
    utils::shutdown_signal,
};

/// Drive the UI until the user quits or a shutdown signal arrives.
///
/// Every mutation happens on this task. The tick only advances the timer
/// while it is running; a stopped timer just has its clock label refreshed.
pub async fn run_event_loop(
    terminal: &mut Tui,
    app: &mut AppState,
    config: &Config,
) -> anyhow::Result<()> {
    info!("Starting event loop");

    let mut ui = UiState::new();
    let mut events = EventStream::new();
    let mut ticker = interval(config.tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        terminal
            .draw(|f| view::render(f, app, &ui))
            .context("Failed to draw frame")?;

        tokio::select! {
            _ = ticker.tick() => app.tick(),

            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    handle_key(key, app, &mut ui);
                }
                Some(Ok(other)) => debug!("Ignoring terminal event: {:?}", other),
                Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                None => {
                    info!("Terminal event stream closed");
                    break;
                }
            },

            _ = &mut shutdown => {
                info!("Shutdown signal received");
                break;
            }
        }

        let completions = ui.show_notices(app.take_notices());
        for _ in 0..completions {
            alert_completion();
        }

        if ui.should_quit {
            info!("Quit requested");
            break;
        }
    }

    Ok(())
}
