//! Mention feed service
//!
//! Owns the pagination/loading state for one target and turns aggregation API
//! pages into records. The rendering layer reads `snapshot()`; the only
//! actions are `initialize`, `load_next_page` and `reconfigure`.
//!
//! State lives behind an async lock that is never held across a network
//! call, so a renderer can observe `is_loading` while a fetch is in flight.
//! Every restart bumps a generation number; responses that arrive for an
//! older generation are dropped.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::app::pipeline::normalize_page;
use crate::config::FeedConfig;
use crate::domain::entities::{MentionCount, MentionRecord};
use crate::domain::ports::{MentionQuery, MentionSource, Sanitizer};
use crate::error::{FeedError, FetchErrorKind};

/// Lifecycle of a feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedPhase {
    /// Nothing requested yet
    Idle,
    /// First page in flight
    Loading,
    /// Settled, whether or not the last fetch succeeded
    Loaded,
    /// A further page in flight on top of loaded records
    LoadingNext,
}

/// Mutable state of a feed
#[derive(Debug, Clone)]
pub struct FeedState {
    pub records: Vec<MentionRecord>,
    /// Last confirmed page, or the start page before any success
    pub page: u32,
    /// Whether `page` has actually been fetched
    pub page_confirmed: bool,
    pub phase: FeedPhase,
    pub is_last_page: bool,
    pub counter: Option<MentionCount>,
    pub last_error: Option<FetchErrorKind>,
}

impl FeedState {
    fn starting_at(page: u32) -> Self {
        Self {
            records: Vec::new(),
            page,
            page_confirmed: false,
            phase: FeedPhase::Idle,
            is_last_page: false,
            counter: None,
            last_error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FeedPhase::Loading | FeedPhase::LoadingNext)
    }

    /// Page the next fetch should request
    fn next_page(&self) -> u32 {
        if self.page_confirmed {
            self.page.saturating_add(1)
        } else {
            self.page
        }
    }
}

/// Read-only view of a feed for the rendering layer
#[derive(Debug, Clone, Serialize)]
pub struct FeedSnapshot {
    pub records: Vec<MentionRecord>,
    pub page: u32,
    pub phase: FeedPhase,
    pub is_loading: bool,
    pub is_last_page: bool,
    pub counter: Option<MentionCount>,
    pub last_error: Option<FetchErrorKind>,
}

impl FeedSnapshot {
    /// A next page is in flight on top of records already shown
    pub fn is_appending(&self) -> bool {
        self.is_loading && !self.records.is_empty()
    }
}

impl From<&FeedState> for FeedSnapshot {
    fn from(state: &FeedState) -> Self {
        Self {
            records: state.records.clone(),
            page: state.page,
            phase: state.phase,
            is_loading: state.is_loading(),
            is_last_page: state.is_last_page,
            counter: state.counter.clone(),
            last_error: state.last_error,
        }
    }
}

/// Result of a page request that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// Page fetched; `fetched` raw entries (malformed ones included),
    /// `appended` of them kept
    Loaded {
        page: u32,
        fetched: usize,
        appended: usize,
    },
    /// Already at the last page, nothing requested
    LastPage,
    /// A fetch is already in flight, nothing requested
    Busy,
    /// The feed was restarted while this fetch was in flight
    Stale,
    /// `reconfigure` with the current configuration
    Unchanged,
}

struct Inner {
    config: FeedConfig,
    state: FeedState,
    generation: u64,
}

/// Paginated, filtered mention feed for one target
pub struct MentionFeed<S>
where
    S: MentionSource,
{
    source: Arc<S>,
    sanitizer: Arc<dyn Sanitizer>,
    inner: RwLock<Inner>,
}

impl<S> MentionFeed<S>
where
    S: MentionSource,
{
    pub fn new(
        source: Arc<S>,
        sanitizer: Arc<dyn Sanitizer>,
        config: FeedConfig,
    ) -> Result<Self, FeedError> {
        config.validate()?;
        let state = FeedState::starting_at(config.start_page);

        Ok(Self {
            source,
            sanitizer,
            inner: RwLock::new(Inner {
                config,
                state,
                generation: 0,
            }),
        })
    }

    /// Reset and load the start page, plus the counter when enabled.
    ///
    /// A failed counter fetch is logged and leaves `counter` unset. A failed
    /// mentions fetch leaves an empty, settled feed and is returned so the
    /// caller can tell "failed" from "empty".
    pub async fn initialize(&self) -> Result<PageOutcome, FeedError> {
        let (config, generation) = {
            let mut inner = self.inner.write().await;
            inner.generation += 1;
            inner.state = FeedState::starting_at(inner.config.start_page);
            inner.state.phase = FeedPhase::Loading;
            (inner.config.clone(), inner.generation)
        };

        tracing::debug!(
            "Initializing mention feed for {} at page {}",
            config.target_url,
            config.start_page
        );

        let counter = async {
            if config.with_counter {
                self.load_counter(&config.target_url, generation).await;
            }
        };
        let (_, outcome) = tokio::join!(
            counter,
            self.fetch_page(&config, config.start_page, generation)
        );

        outcome
    }

    /// Fetch the page after the last confirmed one and append its records.
    ///
    /// No-op at the last page or while another fetch is in flight. On failure
    /// the cursor stays where it was, so calling again retries the same page.
    pub async fn load_next_page(&self) -> Result<PageOutcome, FeedError> {
        let (config, generation, page) = {
            let mut inner = self.inner.write().await;
            if inner.state.is_last_page {
                return Ok(PageOutcome::LastPage);
            }
            if inner.state.is_loading() {
                tracing::debug!("load_next_page while a fetch is in flight, ignoring");
                return Ok(PageOutcome::Busy);
            }

            inner.state.phase = if inner.state.page_confirmed {
                FeedPhase::LoadingNext
            } else {
                FeedPhase::Loading
            };
            (
                inner.config.clone(),
                inner.generation,
                inner.state.next_page(),
            )
        };

        self.fetch_page(&config, page, generation).await
    }

    /// Swap the configuration. A different configuration resets every piece
    /// of state and initializes again; the same one changes nothing.
    pub async fn reconfigure(&self, config: FeedConfig) -> Result<PageOutcome, FeedError> {
        config.validate()?;
        {
            let mut inner = self.inner.write().await;
            if inner.config == config {
                return Ok(PageOutcome::Unchanged);
            }
            tracing::info!("Reconfiguring mention feed for {}", config.target_url);
            inner.config = config;
        }

        self.initialize().await
    }

    pub async fn snapshot(&self) -> FeedSnapshot {
        FeedSnapshot::from(&self.inner.read().await.state)
    }

    pub async fn config(&self) -> FeedConfig {
        self.inner.read().await.config.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.read().await.state.is_loading()
    }

    pub async fn is_last_page(&self) -> bool {
        self.inner.read().await.state.is_last_page
    }

    async fn fetch_page(
        &self,
        config: &FeedConfig,
        page: u32,
        generation: u64,
    ) -> Result<PageOutcome, FeedError> {
        let query = MentionQuery {
            target: config.target_url.clone(),
            page,
            per_page: config.page_size,
            properties: config
                .server_side_filter
                .then(|| config.allowed_types.clone()),
        };

        let result = self.source.fetch_mentions(&query).await;

        let mut inner = self.inner.write().await;
        if inner.generation != generation {
            tracing::debug!("Discarding stale response for page {}", page);
            return Ok(PageOutcome::Stale);
        }
        let state = &mut inner.state;

        match result {
            Ok(body) => {
                let fetched = body.received();
                let records =
                    normalize_page(&body.children, &config.allowed_types, self.sanitizer.as_ref());
                let appended = records.len();

                state.records.extend(records);
                state.page = page;
                state.page_confirmed = true;
                state.is_last_page = fetched < config.page_size as usize;
                state.phase = FeedPhase::Loaded;
                state.last_error = None;

                tracing::info!(
                    "Loaded page {} for {}: {} entries, {} kept{}",
                    page,
                    config.target_url,
                    fetched,
                    appended,
                    if state.is_last_page { " (last page)" } else { "" }
                );

                Ok(PageOutcome::Loaded {
                    page,
                    fetched,
                    appended,
                })
            }
            Err(e) => {
                tracing::error!(
                    "Failed to fetch mentions for {} (page {}): {}",
                    config.target_url,
                    page,
                    e
                );
                state.phase = FeedPhase::Loaded;
                state.last_error = Some(e.kind());
                Err(e.into())
            }
        }
    }

    async fn load_counter(&self, target: &str, generation: u64) {
        match self.source.fetch_count(target).await {
            Ok(count) => {
                let mut inner = self.inner.write().await;
                if inner.generation == generation {
                    inner.state.counter = Some(count);
                }
            }
            Err(e) => {
                tracing::warn!("Failed to fetch mention count for {}: {}", target, e);
            }
        }
    }
}
