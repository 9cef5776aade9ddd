//! Error types for the webmention feed
//!
//! This module defines error types for each layer:
//! - `FetchError`: aggregation API client errors (transport, status, decoding)
//! - `ConfigError`: invalid or missing configuration
//! - `FeedError`: application layer errors returned by `MentionFeed`

use serde::Serialize;
use thiserror::Error;

/// Aggregation API client errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Coarse classification of a failed fetch, kept in feed state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    /// Network unreachable, DNS, connection reset...
    Transport,
    /// Non-success HTTP status
    Status,
    /// Body was not the expected JSON
    Decode,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Request(e) if e.is_decode() => FetchErrorKind::Decode,
            FetchError::Request(_) => FetchErrorKind::Transport,
            FetchError::Api { .. } | FetchError::RateLimited => FetchErrorKind::Status,
            FetchError::Deserialization(_) => FetchErrorKind::Decode,
        }
    }
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchErrorKind::Transport => write!(f, "transport"),
            FetchErrorKind::Status => write!(f, "status"),
            FetchErrorKind::Decode => write!(f, "decode"),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required setting: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("Page size must be positive")]
    ZeroPageSize,

    #[error("Unknown reaction kind: {0}")]
    UnknownReactionKind(String),

    #[error("No reaction kinds allowed")]
    NoAllowedTypes,
}

/// Application layer errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl FeedError {
    /// Fetch failure kind, if this error came from the aggregation API
    pub fn fetch_kind(&self) -> Option<FetchErrorKind> {
        match self {
            FeedError::Fetch(e) => Some(e.kind()),
            FeedError::Config(_) => None,
        }
    }
}
