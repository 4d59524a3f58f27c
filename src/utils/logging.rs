//! Tracing setup
//!
//! The terminal is taken over by the UI, so log lines go to a file.

use std::{fs::OpenOptions, sync::Mutex};

use anyhow::Context;

use crate::config::Config;

/// Install the global subscriber, appending to `config.log_file`
pub fn init_tracing(config: &Config) -> anyhow::Result<()> {
    if let Some(parent) = config.log_file.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("cannot open log file {}", config.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
