//! Mention domain entity
//!
//! A `MentionRecord` is what survives the filter/normalize pipeline: every
//! field the view needs is present and the content is already sanitized.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Identifier assigned by the aggregation service (`wm-id`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MentionId(pub String);

impl From<&str> for MentionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for MentionId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for MentionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category of a mention (`wm-property`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReactionKind {
    #[serde(rename = "in-reply-to")]
    Reply,
    #[serde(rename = "like-of")]
    Like,
    #[serde(rename = "repost-of")]
    Repost,
    #[serde(rename = "mention-of")]
    Mention,
    #[serde(rename = "bookmark-of")]
    Bookmark,
    #[serde(rename = "rsvp")]
    Rsvp,
}

impl ReactionKind {
    /// Kinds shown when nothing narrower is configured
    pub const DEFAULT_ALLOWED: [ReactionKind; 4] = [
        ReactionKind::Reply,
        ReactionKind::Like,
        ReactionKind::Repost,
        ReactionKind::Mention,
    ];

    /// Wire name as used in `wm-property`
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionKind::Reply => "in-reply-to",
            ReactionKind::Like => "like-of",
            ReactionKind::Repost => "repost-of",
            ReactionKind::Mention => "mention-of",
            ReactionKind::Bookmark => "bookmark-of",
            ReactionKind::Rsvp => "rsvp",
        }
    }
}

impl std::fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReactionKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "in-reply-to" | "reply" => Ok(ReactionKind::Reply),
            "like-of" | "like" => Ok(ReactionKind::Like),
            "repost-of" | "repost" => Ok(ReactionKind::Repost),
            "mention-of" | "mention" => Ok(ReactionKind::Mention),
            "bookmark-of" | "bookmark" => Ok(ReactionKind::Bookmark),
            "rsvp" => Ok(ReactionKind::Rsvp),
            _ => Err(ConfigError::UnknownReactionKind(s.to_string())),
        }
    }
}

/// Normalized, renderable mention
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MentionRecord {
    pub id: MentionId,
    /// Source of the reaction
    pub url: String,
    pub author_name: String,
    /// May be empty
    pub author_avatar: String,
    /// ISO-8601, as delivered by the service
    pub published_at: String,
    pub property_type: ReactionKind,
    /// Sanitized HTML fragment
    pub content_html: String,
}
