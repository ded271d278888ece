//! Contact Book - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout.

use anyhow::Result;
use contact_book::{Config, Repl, SystemClock};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout for the conversation)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        window_days = config.birthday_window_days,
        "Configuration loaded successfully"
    );

    let mut repl = Repl::new(&config, SystemClock);
    let stdin = io::stdin();
    if let Err(e) = repl.run(stdin.lock(), io::stdout().lock()) {
        error!("Session aborted: {}", e);
        return Err(e.into());
    }

    Ok(())
}
