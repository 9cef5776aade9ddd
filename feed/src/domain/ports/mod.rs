//! Domain ports (traits)
//!
//! Port traits define interfaces that the feed requires from its host.
//! Adapters provide concrete implementations of these traits.

pub mod mention_source;
pub mod sanitizer;

pub use mention_source::{MentionPage, MentionQuery, MentionSource, RawAuthor, RawContent, RawEntry};
pub use sanitizer::Sanitizer;
