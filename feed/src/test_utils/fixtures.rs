//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture creates a valid entry or record that can be customized.

use std::ops::Range;

use crate::domain::entities::{MentionCount, MentionId, MentionRecord, ReactionCounts, ReactionKind};
use crate::domain::ports::{RawAuthor, RawContent, RawEntry};

/// Create a valid reply entry with HTML content
pub fn test_entry(id: &str) -> RawEntry {
    RawEntry {
        wm_id: Some(MentionId::from(id)),
        url: format!("https://alice.example/replies/{}", id),
        wm_property: "in-reply-to".to_string(),
        published: "2020-03-01T12:30:00+00:00".to_string(),
        author: RawAuthor {
            name: "Alice".to_string(),
            photo: "https://alice.example/photo.jpg".to_string(),
        },
        content: RawContent {
            html: Some("<p>Great post!</p>".to_string()),
            text: Some("Great post!".to_string()),
        },
    }
}

/// Create a valid entry of a specific `wm-property`
pub fn test_entry_of_kind(id: &str, kind: &str) -> RawEntry {
    RawEntry {
        wm_property: kind.to_string(),
        ..test_entry(id)
    }
}

/// Create a valid entry carrying only plain text
pub fn test_text_entry(id: &str, text: &str) -> RawEntry {
    RawEntry {
        content: RawContent {
            html: None,
            text: Some(text.to_string()),
        },
        ..test_entry(id)
    }
}

/// Create valid entries with ids taken from a range
pub fn test_entries(ids: Range<u32>) -> Vec<RawEntry> {
    ids.map(|i| test_entry(&i.to_string())).collect()
}

/// Create a normalized record
pub fn test_record(id: &str) -> MentionRecord {
    MentionRecord {
        id: MentionId::from(id),
        url: format!("https://alice.example/replies/{}", id),
        author_name: "Alice".to_string(),
        author_avatar: "https://alice.example/photo.jpg".to_string(),
        published_at: "2020-03-01T12:30:00+00:00".to_string(),
        property_type: ReactionKind::Reply,
        content_html: "<p>Great post!</p>".to_string(),
    }
}

/// Create a counter response
pub fn test_count(like: u64, repost: u64, mention: u64) -> MentionCount {
    MentionCount {
        count: Some(like + repost + mention),
        kinds: ReactionCounts {
            like,
            repost,
            mention,
            ..Default::default()
        },
    }
}
