//! Aggregate mention counts for a target

use serde::{Deserialize, Serialize};

/// Response of the counter endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionCount {
    /// Total across every kind, when the service reports it
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(rename = "type", default)]
    pub kinds: ReactionCounts,
}

/// Per-kind counts. Kinds the service omits count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCounts {
    #[serde(default)]
    pub like: u64,
    #[serde(default)]
    pub repost: u64,
    #[serde(default)]
    pub mention: u64,
    #[serde(default)]
    pub reply: u64,
    #[serde(default)]
    pub bookmark: u64,
}
