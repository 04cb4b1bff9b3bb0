//! Contact Assistant - Main entry point
//!
//! Starts the interactive command loop over stdin/stdout with an empty
//! in-memory address book.

use anyhow::Result;
use contact_assistant::{repl, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only to avoid polluting command replies)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting contact assistant (birthday window: {} days)",
        config.birthday_window_days
    );

    repl::run(&config)?;

    info!("Contact assistant shutdown complete");
    Ok(())
}
