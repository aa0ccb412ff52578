//! Contact Book - Main entry point
//!
//! Loads the snapshot, runs the interactive assistant until `close`/`exit`,
//! and saves the snapshot on the way out.

use anyhow::Result;
use contact_book::repl::{self, Session};
use contact_book::{storage, Config};
use std::io;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only to keep the interactive stdout clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting contact book with snapshot at {}",
        config.snapshot_path.display()
    );

    // Load the book once, before the first command
    let book = storage::snapshot::load(&config.snapshot_path)?;
    let mut session = Session::new(book, config.birthday_window_days);

    let stdin = io::stdin();
    repl::run(&mut session, stdin.lock(), io::stdout())?;

    // Save once, after the exit command; a failed save must not lose the
    // farewell that already happened, so it degrades to a warning.
    if let Err(e) = storage::snapshot::save(&config.snapshot_path, session.book()) {
        warn!("Failed to save snapshot: {}", e);
    }

    info!("Contact book shutdown complete");
    Ok(())
}
