//! Contact assistant - Main entry point
//!
//! Runs the interactive phone book on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use contact_assistant::repl::run_repl;
use contact_assistant::{AddressBook, Config};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only so replies on stdout stay clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let mut book = AddressBook::new();
    let stdin = BufReader::new(tokio::io::stdin());
    run_repl(&mut book, &config, stdin, tokio::io::stdout()).await?;

    info!(contacts = book.len(), "Contact assistant shutdown complete");
    Ok(())
}
