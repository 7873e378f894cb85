use std::path::Path;

use anyhow::Context;
use clap::Parser;

mod api;
mod cli;
mod core;
mod error;
mod generators;
mod models;

use crate::cli::Args;
use crate::core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    log::info!("Starting PassForge - Password Generation & Analysis Service");

    // Warm the process-wide wordlist so the first passphrase request does
    // not pay for parsing.
    log::info!(
        "Wordlist loaded: {} words ({:.1} bits per word)",
        generators::wordlist::len(),
        generators::wordlist::bits_per_word()
    );

    api::start_server(&config)
        .await
        .context("API server failed")?;

    log::info!("PassForge shutdown complete");
    Ok(())
}
