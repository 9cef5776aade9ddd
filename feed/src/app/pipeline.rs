//! Filter/normalize pipeline
//!
//! Turns one page of raw entries into renderable records. Entries of a kind
//! that is not allowed, or missing an id, author name, published timestamp or
//! content, are dropped without error.

use std::collections::HashSet;

use crate::domain::entities::{MentionRecord, ReactionKind};
use crate::domain::ports::{RawContent, RawEntry, Sanitizer};

/// Why an entry did not become a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    NotAllowed(String),
    MissingId,
    MissingAuthor,
    MissingPublished,
    MissingContent,
    Duplicate,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::NotAllowed(kind) => write!(f, "kind {:?} not allowed", kind),
            Rejection::MissingId => write!(f, "missing wm-id"),
            Rejection::MissingAuthor => write!(f, "missing author name"),
            Rejection::MissingPublished => write!(f, "missing published timestamp"),
            Rejection::MissingContent => write!(f, "missing content"),
            Rejection::Duplicate => write!(f, "duplicate wm-id in page"),
        }
    }
}

/// Normalize one page of raw entries, keeping API order
pub fn normalize_page(
    entries: &[RawEntry],
    allowed: &[ReactionKind],
    sanitizer: &dyn Sanitizer,
) -> Vec<MentionRecord> {
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(entries.len());

    for entry in entries {
        let result = normalize_entry(entry, allowed, sanitizer).and_then(|record| {
            if seen.insert(record.id.clone()) {
                Ok(record)
            } else {
                Err(Rejection::Duplicate)
            }
        });

        match result {
            Ok(record) => records.push(record),
            Err(reason) => {
                tracing::debug!(
                    "Dropping entry {}: {}",
                    entry
                        .wm_id
                        .as_ref()
                        .map(|id| id.to_string())
                        .unwrap_or_else(|| "?".to_string()),
                    reason
                );
            }
        }
    }

    records
}

/// Filter, validate and normalize a single entry
pub fn normalize_entry(
    entry: &RawEntry,
    allowed: &[ReactionKind],
    sanitizer: &dyn Sanitizer,
) -> Result<MentionRecord, Rejection> {
    let kind = entry
        .wm_property
        .parse::<ReactionKind>()
        .ok()
        .filter(|kind| allowed.contains(kind))
        .ok_or_else(|| Rejection::NotAllowed(entry.wm_property.clone()))?;

    let id = entry.wm_id.clone().ok_or(Rejection::MissingId)?;

    let author_name = entry.author.name.trim();
    if author_name.is_empty() {
        return Err(Rejection::MissingAuthor);
    }

    let published = entry.published.trim();
    if published.is_empty() {
        return Err(Rejection::MissingPublished);
    }

    let content_html = content_html(&entry.content, sanitizer).ok_or(Rejection::MissingContent)?;

    Ok(MentionRecord {
        id,
        url: entry.url.clone(),
        author_name: author_name.to_string(),
        author_avatar: entry.author.photo.trim().to_string(),
        published_at: published.to_string(),
        property_type: kind,
        content_html,
    })
}

/// Sanitized html when present, otherwise escaped text in one paragraph
pub fn content_html(content: &RawContent, sanitizer: &dyn Sanitizer) -> Option<String> {
    let html = non_blank(content.html.as_deref())
        .map(|html| sanitizer.sanitize(html))
        .filter(|clean| !clean.trim().is_empty());

    html.or_else(|| non_blank(content.text.as_deref()).map(wrap_text))
}

fn wrap_text(text: &str) -> String {
    format!("<p>{}</p>", html_escape::encode_text(text.trim()))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
