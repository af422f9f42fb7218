//! STM arrivals HTTP client.
//!
//! Performs the single arrivals fetch for one query and holds the
//! resulting snapshot until a caller forces a refresh. One client
//! serves one query; concurrent invocations should each construct
//! their own client.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use super::error::ArrivalsError;
use super::query::ArrivalQuery;
use super::types::{ArrivalsResponse, ScheduleSnapshot};

/// Default base URL for the STM i3 API.
const DEFAULT_BASE_URL: &str = "https://api.stm.info/pub/i3/v1c/api/en";

/// Default request timeout in seconds. The API sets no deadline of its
/// own, so an unresponsive upstream would otherwise hang the caller.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the STM client.
#[derive(Debug, Clone)]
pub struct StmConfig {
    /// Base URL for the API (defaults to production STM)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StmConfig {
    /// Create a config with production defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for StmConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// STM arrivals API client for a single query.
///
/// The first successful fetch is cached; `snapshot(false)` returns it
/// without touching the network, `snapshot(true)` replaces it
/// wholesale. A failed refresh leaves the old snapshot in place and
/// propagates the error.
pub struct ArrivalClient {
    http: reqwest::Client,
    base_url: String,
    query: ArrivalQuery,
    snapshot: RwLock<Option<Arc<ScheduleSnapshot>>>,
}

impl ArrivalClient {
    /// Create a new client for the given query.
    pub fn new(config: StmConfig, query: ArrivalQuery) -> Result<Self, ArrivalsError> {
        let http = reqwest::Client::builder()
            .default_headers(query.request_headers())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            query,
            snapshot: RwLock::new(None),
        })
    }

    /// The query this client was built for.
    pub fn query(&self) -> &ArrivalQuery {
        &self.query
    }

    /// Issue a single GET and return the raw response body.
    ///
    /// A non-success status is surfaced with its body for diagnosis
    /// rather than being passed on to the JSON decoder.
    pub async fn fetch_raw(&self) -> Result<String, ArrivalsError> {
        let url = self.query.api_url(&self.base_url);
        debug!(%url, "fetching arrivals");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ArrivalsError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }

    /// Fetch and decode one schedule snapshot.
    ///
    /// A body without a `result` field, or with entries missing any
    /// expected field, is a parse error; an empty `result` array is a
    /// valid empty snapshot.
    pub async fn fetch_snapshot(&self) -> Result<ScheduleSnapshot, ArrivalsError> {
        let body = self.fetch_raw().await?;

        let response: ArrivalsResponse =
            serde_json::from_str(&body).map_err(|e| ArrivalsError::Parse {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        debug!(entries = response.result.len(), "decoded arrivals");
        Ok(ScheduleSnapshot::from(response))
    }

    /// Return the cached snapshot, fetching only if none exists yet or
    /// `force` is set.
    pub async fn snapshot(&self, force: bool) -> Result<Arc<ScheduleSnapshot>, ArrivalsError> {
        if !force {
            if let Some(cached) = self.snapshot.read().await.as_ref() {
                return Ok(Arc::clone(cached));
            }
        }

        let fresh = Arc::new(self.fetch_snapshot().await?);
        *self.snapshot.write().await = Some(Arc::clone(&fresh));
        Ok(fresh)
    }
}
