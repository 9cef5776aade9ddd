//! Drives a `MentionFeed` the way a page would: initialize, then keep
//! pressing "load more" when asked to, then render.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;
use webmention_feed::{
    render_feed, AmmoniaSanitizer, Config, MentionFeed, MentionSource, PageOutcome,
    PassthroughSanitizer, Sanitizer, WebmentionIoClient,
};

pub async fn run(config: &Config) -> Result<String> {
    let client = WebmentionIoClient::new(config.endpoints.clone())
        .context("Failed to build HTTP client")?;
    let feed = mount(Arc::new(client), config)?;

    load(&feed, config.all_pages).await;

    Ok(render_feed(&feed.snapshot().await, &Local))
}

pub fn mount<S: MentionSource>(source: Arc<S>, config: &Config) -> Result<MentionFeed<S>> {
    let sanitizer: Arc<dyn Sanitizer> = if config.trusted_html {
        tracing::warn!("Rendering upstream HTML without sanitizing");
        Arc::new(PassthroughSanitizer)
    } else {
        Arc::new(AmmoniaSanitizer::new())
    };

    MentionFeed::new(source, sanitizer, config.feed.clone()).context("Invalid feed configuration")
}

/// Failures end up as an empty or partial list, like on a page
pub async fn load<S: MentionSource>(feed: &MentionFeed<S>, all_pages: bool) {
    if let Err(e) = feed.initialize().await {
        tracing::warn!("Showing empty feed: {}", e);
        return;
    }

    if !all_pages {
        return;
    }

    loop {
        match feed.load_next_page().await {
            Ok(PageOutcome::Loaded { .. }) => continue,
            Ok(_) => break,
            Err(e) => {
                tracing::warn!("Stopping at page {}: {}", feed.snapshot().await.page, e);
                break;
            }
        }
    }
}
