//! Application layer
//!
//! Query construction, the filter/normalize pipeline and the feed state
//! machine that ties them to a `MentionSource`.

pub mod feed_service;
pub mod pipeline;
pub mod query;

pub use feed_service::{FeedPhase, FeedSnapshot, FeedState, MentionFeed, PageOutcome};
pub use pipeline::{content_html, normalize_entry, normalize_page, Rejection};
pub use query::{build_query, QueryValue};
