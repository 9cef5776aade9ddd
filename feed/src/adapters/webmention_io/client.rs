//! webmention.io API client implementation

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::Deserialize;

use crate::app::query::{build_query, count_params, mentions_params};
use crate::config::EndpointConfig;
use crate::domain::entities::MentionCount;
use crate::domain::ports::{MentionPage, MentionQuery, MentionSource};
use crate::error::FetchError;

/// Implementation of `MentionSource` against webmention.io
#[derive(Clone)]
pub struct WebmentionIoClient {
    http: Client,
    endpoints: EndpointConfig,
}

impl WebmentionIoClient {
    pub fn new(endpoints: EndpointConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("webmention-feed/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(http, endpoints))
    }

    /// Use a preconfigured reqwest client (timeouts, proxies, ...)
    pub fn with_client(http: Client, endpoints: EndpointConfig) -> Self {
        Self {
            http,
            endpoints: EndpointConfig {
                mentions_url: endpoints.mentions_url.trim_end_matches('?').to_string(),
                count_url: endpoints.count_url.trim_end_matches('?').to_string(),
            },
        }
    }

    pub fn mentions_url(&self, query: &MentionQuery) -> String {
        format!(
            "{}?{}",
            self.endpoints.mentions_url,
            build_query(&mentions_params(query))
        )
    }

    pub fn count_url(&self, target: &str) -> String {
        format!(
            "{}?{}",
            self.endpoints.count_url,
            build_query(&count_params(target))
        )
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, FetchError> {
        tracing::debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, FetchError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| FetchError::Deserialization(e.to_string()))
        } else if status.as_u16() == 429 {
            Err(FetchError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(FetchError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl MentionSource for WebmentionIoClient {
    async fn fetch_mentions(&self, query: &MentionQuery) -> Result<MentionPage, FetchError> {
        self.get_json(&self.mentions_url(query)).await
    }

    async fn fetch_count(&self, target: &str) -> Result<MentionCount, FetchError> {
        self.get_json(&self.count_url(target)).await
    }
}
