//! Webmention feed host
//!
//! Mounts a mention feed for one target from environment variables, loads it
//! (optionally every page) and prints the rendered HTML fragment to stdout.
//!
//! Required env vars:
//! - WEBMENTION_TARGET: URL whose mentions are listed
//!
//! See `webmention_feed::Config::from_env` for the optional ones.

mod host;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use webmention_feed::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Logging goes to stderr, stdout carries the HTML
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,webmention_feed=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("Invalid configuration")?;
    tracing::info!("Loading webmentions for {}", config.feed.target_url);

    let html = host::run(&config).await?;
    print!("{}", html);

    Ok(())
}
