//! View module
//!
//! HTML rendering of feed snapshots and single mentions.

pub mod list;
pub mod mention;

pub use list::{render_counter, render_feed, FEED_STYLES};
pub use mention::{format_published, render_mention, MentionView};
