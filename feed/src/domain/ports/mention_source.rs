//! Aggregation API port trait
//!
//! Defines the interface for querying mentions and counts, and the JF2 wire
//! types the service answers with. Every field of a raw entry is optional on
//! the wire; validation happens in the pipeline, not here.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::{MentionCount, MentionId, ReactionKind};
use crate::error::FetchError;

/// Helper to deserialize null as default (empty string, empty vec, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// `wm-id` is numeric on webmention.io but treated as opaque
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<MentionId>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WireId {
        Number(u64),
        Text(String),
    }

    Ok(match Option::<WireId>::deserialize(deserializer)? {
        Some(WireId::Number(n)) => Some(MentionId::from(n)),
        Some(WireId::Text(s)) if !s.trim().is_empty() => Some(MentionId(s)),
        _ => None,
    })
}

/// One page request against the mentions endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionQuery {
    pub target: String,
    pub page: u32,
    pub per_page: u32,
    /// Sent as repeated `wm-property[]` when set
    pub properties: Option<Vec<ReactionKind>>,
}

/// Body of the mentions endpoint.
///
/// Children are decoded one by one: an entry whose fields have the wrong
/// shape is counted in `malformed` and dropped, the rest of the page stays.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MentionPage {
    pub children: Vec<RawEntry>,
    #[serde(skip)]
    pub malformed: usize,
}

impl MentionPage {
    pub fn new(children: Vec<RawEntry>) -> Self {
        Self {
            children,
            malformed: 0,
        }
    }

    /// Number of entries the service sent, decodable or not
    pub fn received(&self) -> usize {
        self.children.len() + self.malformed
    }
}

impl<'de> Deserialize<'de> for MentionPage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct WirePage {
            #[serde(default, deserialize_with = "deserialize_null_default")]
            children: Vec<serde_json::Value>,
        }

        let wire = WirePage::deserialize(deserializer)?;
        let mut page = MentionPage {
            children: Vec::with_capacity(wire.children.len()),
            malformed: 0,
        };
        for (index, value) in wire.children.into_iter().enumerate() {
            match serde_json::from_value::<RawEntry>(value) {
                Ok(entry) => page.children.push(entry),
                Err(e) => {
                    tracing::debug!("Dropping malformed entry at index {}: {}", index, e);
                    page.malformed += 1;
                }
            }
        }
        Ok(page)
    }
}

/// Raw mention entry as returned by the service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEntry {
    #[serde(rename = "wm-id", default, deserialize_with = "deserialize_id")]
    pub wm_id: Option<MentionId>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub url: String,
    #[serde(rename = "wm-property", default, deserialize_with = "deserialize_null_default")]
    pub wm_property: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub published: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub author: RawAuthor,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub content: RawContent,
}

/// `author` h-card of a raw entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAuthor {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub photo: String,
}

/// `content` of a raw entry; either side may be absent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawContent {
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Port trait for the aggregation service
#[async_trait]
pub trait MentionSource: Send + Sync {
    /// Fetch one page of raw mentions
    async fn fetch_mentions(&self, query: &MentionQuery) -> Result<MentionPage, FetchError>;

    /// Fetch aggregate counts for a target
    async fn fetch_count(&self, target: &str) -> Result<MentionCount, FetchError>;
}
