//! Advanced Timer - a terminal countdown and stopwatch
//!
//! This is the main entry point for the advanced-timer application.

use tracing::{error, info};

use advanced_timer::{
    clock::SystemClock,
    config::Config,
    state::AppState,
    tasks::run_event_loop,
    ui::terminal,
    utils::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::default();
    init_tracing(&config)?;

    info!("Starting advanced-timer v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: state_file={}, theme={}",
        config.state_file.display(),
        config.theme.name()
    );

    let mut app = AppState::new(&config, Box::new(SystemClock));
    let mut terminal = terminal::setup()?;

    let result = run_event_loop(&mut terminal, &mut app, &config).await;

    // Restore the terminal even if the loop failed
    if let Err(e) = terminal::restore(&mut terminal) {
        error!("Failed to restore terminal: {:#}", e);
    }
    if let Err(ref e) = result {
        error!("Event loop error: {:#}", e);
    }

    info!("Timer shutdown complete");
    result
}
