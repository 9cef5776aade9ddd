//! Webmention feed
//!
//! Fetches webmentions collected by an aggregation service (webmention.io),
//! filters and normalizes them into renderable records, pages through them
//! incrementally and renders them as an embeddable HTML list.
//! Uses ports & adapters: the aggregation API and the HTML sanitizer are
//! traits, with reqwest and ammonia implementations provided.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod view;

#[cfg(test)]
mod test_utils;


pub use adapters::{AmmoniaSanitizer, PassthroughSanitizer, WebmentionIoClient};
pub use app::{build_query, FeedPhase, FeedSnapshot, MentionFeed, PageOutcome, QueryValue};
pub use config::{Config, EndpointConfig, FeedConfig};
pub use domain::entities::{MentionCount, MentionId, MentionRecord, ReactionCounts, ReactionKind};
pub use domain::ports::{MentionSource, Sanitizer};
pub use error::{ConfigError, FeedError, FetchError, FetchErrorKind};
pub use view::{render_feed, render_mention, MentionView};
