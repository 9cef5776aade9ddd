//! Query string construction
//!
//! Pure mapping from ordered parameters to `key=value&...`. Values are
//! percent-encoded, keys are emitted verbatim, and list values become
//! repeated `key[]=value` pairs.

use urlencoding::encode;

use crate::domain::ports::MentionQuery;

/// A single query parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Single(String),
    Many(Vec<String>),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Single(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Single(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Single(value.to_string())
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        QueryValue::Many(values)
    }
}

impl From<&[&str]> for QueryValue {
    fn from(values: &[&str]) -> Self {
        QueryValue::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Build a query string, preserving parameter order
pub fn build_query<K: AsRef<str>>(params: &[(K, QueryValue)]) -> String {
    let mut pairs = Vec::new();
    for (key, value) in params {
        let key = key.as_ref();
        match value {
            QueryValue::Single(v) => pairs.push(format!("{}={}", key, encode(v))),
            QueryValue::Many(values) => {
                for v in values {
                    pairs.push(format!("{}[]={}", key, encode(v)));
                }
            }
        }
    }
    pairs.join("&")
}

/// Parameters of a mentions request, in the order the service documents them
pub fn mentions_params(query: &MentionQuery) -> Vec<(&'static str, QueryValue)> {
    let mut params = vec![("target", QueryValue::from(query.target.as_str()))];
    if let Some(properties) = &query.properties {
        params.push((
            "wm-property",
            QueryValue::Many(properties.iter().map(|p| p.as_str().to_string()).collect()),
        ));
    }
    params.push(("per-page", query.per_page.into()));
    params.push(("page", query.page.into()));
    params
}

pub fn count_params(target: &str) -> Vec<(&'static str, QueryValue)> {
    vec![("target", target.into())]
}
