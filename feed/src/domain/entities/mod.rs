//! Domain entities
//!
//! Normalized, renderable values produced by the feed pipeline.

pub mod counter;
pub mod mention;

pub use counter::{MentionCount, ReactionCounts};
pub use mention::{MentionId, MentionRecord, ReactionKind};
