use std::env;

use crate::domain::entities::ReactionKind;
use crate::error::ConfigError;

pub const DEFAULT_MENTIONS_URL: &str = "https://webmention.io/api/mentions.jf2";
pub const DEFAULT_COUNT_URL: &str = "https://webmention.io/api/count.json";
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// What a `MentionFeed` shows and how it pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Page whose mentions are listed
    pub target_url: String,
    /// Kinds kept by the pipeline, in request order
    pub allowed_types: Vec<ReactionKind>,
    pub page_size: u32,
    /// Fetch aggregate counts on initialize
    pub with_counter: bool,
    /// First page requested on initialize
    pub start_page: u32,
    /// Also narrow by kind on the server via `wm-property[]`
    pub server_side_filter: bool,
}

impl FeedConfig {
    pub fn new(target_url: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into(),
            allowed_types: ReactionKind::DEFAULT_ALLOWED.to_vec(),
            page_size: DEFAULT_PAGE_SIZE,
            with_counter: false,
            start_page: 0,
            server_side_filter: false,
        }
    }

    pub fn with_allowed_types(mut self, types: impl IntoIterator<Item = ReactionKind>) -> Self {
        let mut allowed = Vec::new();
        for kind in types {
            if !allowed.contains(&kind) {
                allowed.push(kind);
            }
        }
        self.allowed_types = allowed;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_counter(mut self, enabled: bool) -> Self {
        self.with_counter = enabled;
        self
    }

    pub fn with_start_page(mut self, page: u32) -> Self {
        self.start_page = page;
        self
    }

    pub fn with_server_side_filter(mut self, enabled: bool) -> Self {
        self.server_side_filter = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_url.trim().is_empty() {
            return Err(ConfigError::Missing("target_url"));
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.allowed_types.is_empty() {
            return Err(ConfigError::NoAllowedTypes);
        }
        Ok(())
    }
}

/// Aggregation service endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub mentions_url: String,
    pub count_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            mentions_url: DEFAULT_MENTIONS_URL.to_string(),
            count_url: DEFAULT_COUNT_URL.to_string(),
        }
    }
}

/// Everything a host needs to mount a feed, read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub feed: FeedConfig,
    pub endpoints: EndpointConfig,
    /// Upstream HTML is trusted and rendered without sanitizing
    pub trusted_html: bool,
    /// Host keeps loading pages until the last one
    pub all_pages: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let target = lookup("WEBMENTION_TARGET")
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::Missing("WEBMENTION_TARGET"))?;

        let mut feed = FeedConfig::new(target)
            .with_counter(parse_flag(&lookup, "WEBMENTION_WITH_COUNTER")?)
            .with_server_side_filter(parse_flag(&lookup, "WEBMENTION_SERVER_FILTER")?);

        if let Some(types) = lookup("WEBMENTION_TYPES") {
            let kinds = types
                .split(',')
                .filter(|t| !t.trim().is_empty())
                .map(str::parse)
                .collect::<Result<Vec<ReactionKind>, _>>()?;
            feed = feed.with_allowed_types(kinds);
        }
        if let Some(size) = parse_number(&lookup, "WEBMENTION_PAGE_SIZE")? {
            feed = feed.with_page_size(size);
        }
        if let Some(page) = parse_number(&lookup, "WEBMENTION_START_PAGE")? {
            feed = feed.with_start_page(page);
        }
        feed.validate()?;

        let defaults = EndpointConfig::default();
        let endpoints = EndpointConfig {
            mentions_url: lookup("WEBMENTION_MENTIONS_URL").unwrap_or(defaults.mentions_url),
            count_url: lookup("WEBMENTION_COUNT_URL").unwrap_or(defaults.count_url),
        };

        Ok(Self {
            feed,
            endpoints,
            trusted_html: parse_flag(&lookup, "WEBMENTION_TRUSTED_HTML")?,
            all_pages: parse_flag(&lookup, "WEBMENTION_ALL_PAGES")?,
        })
    }
}

fn parse_flag<F>(lookup: &F, key: &'static str) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(false),
        Some(value) => match value.trim().to_lowercase().as_str() {
            "" | "0" | "false" | "no" | "off" => Ok(false),
            "1" | "true" | "yes" | "on" => Ok(true),
            _ => Err(ConfigError::Invalid { key, value }),
        },
    }
}

fn parse_number<F>(lookup: &F, key: &'static str) -> Result<Option<u32>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::Invalid { key, value })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn feed_config_defaults() {
        let config = FeedConfig::new("https://a.example/post");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.start_page, 0);
        assert!(!config.with_counter);
        assert!(!config.server_side_filter);
        assert_eq!(config.allowed_types, ReactionKind::DEFAULT_ALLOWED.to_vec());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn allowed_types_are_deduplicated_in_order() {
        let config = FeedConfig::new("https://a.example").with_allowed_types([
            ReactionKind::Like,
            ReactionKind::Reply,
            ReactionKind::Like,
        ]);
        assert_eq!(
            config.allowed_types,
            vec![ReactionKind::Like, ReactionKind::Reply]
        );
    }

    #[test]
    fn validate_rejects_zero_page_size() {
        let config = FeedConfig::new("https://a.example").with_page_size(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroPageSize));
    }

    #[test]
    fn validate_rejects_empty_target_and_types() {
        assert_eq!(
            FeedConfig::new("  ").validate(),
            Err(ConfigError::Missing("target_url"))
        );
        let config = FeedConfig::new("https://a.example").with_allowed_types(Vec::<ReactionKind>::new());
        assert_eq!(config.validate(), Err(ConfigError::NoAllowedTypes));
    }

    #[test]
    fn from_lookup_requires_target() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("WEBMENTION_TARGET"));
    }

    #[test]
    fn from_lookup_defaults() {
        let config =
            Config::from_lookup(lookup_from(&[("WEBMENTION_TARGET", "https://a.example")]))
                .unwrap();
        assert_eq!(config.feed, FeedConfig::new("https://a.example"));
        assert_eq!(config.endpoints, EndpointConfig::default());
        assert!(!config.trusted_html);
        assert!(!config.all_pages);
    }

    #[test]
    fn from_lookup_reads_everything() {
        let config = Config::from_lookup(lookup_from(&[
            ("WEBMENTION_TARGET", "https://a.example"),
            ("WEBMENTION_TYPES", "in-reply-to, like"),
            ("WEBMENTION_PAGE_SIZE", "10"),
            ("WEBMENTION_START_PAGE", "2"),
            ("WEBMENTION_WITH_COUNTER", "true"),
            ("WEBMENTION_SERVER_FILTER", "1"),
            ("WEBMENTION_MENTIONS_URL", "http://localhost:9000/mentions"),
            ("WEBMENTION_TRUSTED_HTML", "yes"),
            ("WEBMENTION_ALL_PAGES", "on"),
        ]))
        .unwrap();

        assert_eq!(
            config.feed.allowed_types,
            vec![ReactionKind::Reply, ReactionKind::Like]
        );
        assert_eq!(config.feed.page_size, 10);
        assert_eq!(config.feed.start_page, 2);
        assert!(config.feed.with_counter);
        assert!(config.feed.server_side_filter);
        assert_eq!(config.endpoints.mentions_url, "http://localhost:9000/mentions");
        assert_eq!(config.endpoints.count_url, DEFAULT_COUNT_URL);
        assert!(config.trusted_html);
        assert!(config.all_pages);
    }

    #[test]
    fn from_lookup_rejects_bad_values() {
        let err = Config::from_lookup(lookup_from(&[
            ("WEBMENTION_TARGET", "https://a.example"),
            ("WEBMENTION_PAGE_SIZE", "ten"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "WEBMENTION_PAGE_SIZE",
                value: "ten".to_string()
            }
        );

        let err = Config::from_lookup(lookup_from(&[
            ("WEBMENTION_TARGET", "https://a.example"),
            ("WEBMENTION_TYPES", "like,poke"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::UnknownReactionKind("poke".to_string()));

        let err = Config::from_lookup(lookup_from(&[
            ("WEBMENTION_TARGET", "https://a.example"),
            ("WEBMENTION_PAGE_SIZE", "0"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::ZeroPageSize);
    }
}
