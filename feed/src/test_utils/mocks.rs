//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing and record
//! what they were asked for.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::Notify;

use crate::domain::entities::MentionCount;
use crate::domain::ports::{MentionPage, MentionQuery, MentionSource, RawEntry};
use crate::error::FetchError;

// ============================================================================
// Mock Mention Source
// ============================================================================

/// Scripted aggregation API.
///
/// Pages that were not configured come back empty. The counter endpoint fails
/// unless `with_count` was called.
#[derive(Default)]
pub struct MockMentionSource {
    pages: Arc<RwLock<HashMap<u32, MentionPage>>>,
    /// page -> remaining failures
    failures: Arc<RwLock<HashMap<u32, usize>>>,
    count: Arc<RwLock<Option<MentionCount>>>,
    requests: Arc<RwLock<Vec<MentionQuery>>>,
    count_requests: Arc<RwLock<Vec<String>>>,
    /// (started, release): every mentions fetch signals `started` and then
    /// waits for `release`
    gate: Option<(Arc<Notify>, Arc<Notify>)>,
}

impl MockMentionSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every mentions fetch block until released
    pub fn gated(mut source: Self) -> (Self, Arc<Notify>, Arc<Notify>) {
        let started = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        source.gate = Some((started.clone(), release.clone()));
        (source, started, release)
    }

    /// Configure the raw entries returned for a page
    pub fn with_page(self, page: u32, entries: Vec<RawEntry>) -> Self {
        self.with_body(page, MentionPage::new(entries))
    }

    /// Configure a whole decoded response body for a page
    pub fn with_body(self, page: u32, body: MentionPage) -> Self {
        self.pages.write().unwrap().insert(page, body);
        self
    }

    /// Fail the next `times` fetches of a page with a 500
    pub fn with_failure(self, page: u32, times: usize) -> Self {
        self.failures.write().unwrap().insert(page, times);
        self
    }

    pub fn with_count(self, count: MentionCount) -> Self {
        *self.count.write().unwrap() = Some(count);
        self
    }

    pub fn requests(&self) -> Vec<MentionQuery> {
        self.requests.read().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.read().unwrap().len()
    }

    pub fn count_requests(&self) -> Vec<String> {
        self.count_requests.read().unwrap().clone()
    }
}

#[async_trait]
impl MentionSource for MockMentionSource {
    async fn fetch_mentions(&self, query: &MentionQuery) -> Result<MentionPage, FetchError> {
        self.requests.write().unwrap().push(query.clone());

        if let Some((started, release)) = &self.gate {
            started.notify_one();
            release.notified().await;
        }

        {
            let mut failures = self.failures.write().unwrap();
            if let Some(remaining) = failures.get_mut(&query.page) {
                if *remaining > 0 {
                    *remaining -= 1;
                    return Err(FetchError::Api {
                        status: 500,
                        message: "Mock failure".to_string(),
                    });
                }
            }
        }

        Ok(self
            .pages
            .read()
            .unwrap()
            .get(&query.page)
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_count(&self, target: &str) -> Result<MentionCount, FetchError> {
        self.count_requests.write().unwrap().push(target.to_string());

        self.count.read().unwrap().clone().ok_or(FetchError::Api {
            status: 503,
            message: "Mock counter unavailable".to_string(),
        })
    }
}
